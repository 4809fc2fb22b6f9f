//! Name resolution against the profile store

use crate::types::PlayerProfile;
use std::collections::BTreeMap;

/// Resolve a user-supplied name to the canonical stored key and its profile.
///
/// Exact key lookup first, then a linear scan comparing lowercased names.
/// The linear scan is fine at current data scale (a few thousand players).
///
/// Known limitation: if two stored names differ only by case, the scan
/// returns whichever sorts first in the map. The source data has no such
/// collisions; we keep first-match-wins deterministic rather than
/// special-casing it.
pub fn resolve<'a>(
    profiles: &'a BTreeMap<String, PlayerProfile>,
    name: &str,
) -> Option<(&'a str, &'a PlayerProfile)> {
    if let Some((key, profile)) = profiles.get_key_value(name) {
        return Some((key.as_str(), profile));
    }

    let wanted = name.to_lowercase();
    profiles
        .iter()
        .find(|(key, _)| key.to_lowercase() == wanted)
        .map(|(key, profile)| (key.as_str(), profile))
}
