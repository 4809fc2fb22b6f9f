//! Fallback construction of the lightweight search index

use crate::types::{metric_or_zero, PlayerProfile, SearchIndexEntry};
use std::collections::BTreeMap;

/// Project every profile into a [`SearchIndexEntry`] and sort descending by
/// (predicted NBA probability, predicted mean PIE), missing values treated
/// as 0. Likely-NBA players surface first; this is the default iteration
/// order for every listing that applies no sort of its own.
///
/// Only used when the precomputed `api_search_index.json` artifact is
/// absent; the upstream pipeline normally ships the index pre-sorted.
pub fn build_search_index(profiles: &BTreeMap<String, PlayerProfile>) -> Vec<SearchIndexEntry> {
    let mut index: Vec<SearchIndexEntry> = profiles
        .iter()
        .map(|(name, p)| SearchIndexEntry {
            name: name.clone(),
            team: p.team.clone().unwrap_or_default(),
            position: p.pos.clone().unwrap_or_default(),
            year: p.yr,
            made_nba: p.made_nba,
            tier: p.tier.clone().unwrap_or_default(),
            pred_mu: p.pred_mu,
            pred_p_nba: p.pred_p_nba,
        })
        .collect();

    index.sort_by(|a, b| {
        metric_or_zero(b.pred_p_nba)
            .total_cmp(&metric_or_zero(a.pred_p_nba))
            .then_with(|| metric_or_zero(b.pred_mu).total_cmp(&metric_or_zero(a.pred_mu)))
    });

    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(p_nba: Option<f64>, mu: Option<f64>) -> PlayerProfile {
        PlayerProfile { pred_p_nba: p_nba, pred_mu: mu, ..Default::default() }
    }

    #[test]
    fn orders_by_p_nba_then_mu() {
        let mut profiles = BTreeMap::new();
        profiles.insert("A Longshot".to_string(), profile(Some(0.10), Some(8.0)));
        profiles.insert("B Lock".to_string(), profile(Some(0.95), Some(5.0)));
        profiles.insert("C Lock".to_string(), profile(Some(0.95), Some(7.0)));

        let index = build_search_index(&profiles);
        let names: Vec<&str> = index.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["C Lock", "B Lock", "A Longshot"]);
    }

    #[test]
    fn missing_metrics_sink_to_bottom() {
        let mut profiles = BTreeMap::new();
        profiles.insert("Unknown Qty".to_string(), profile(None, None));
        profiles.insert("Known Qty".to_string(), profile(Some(0.5), Some(1.0)));

        let index = build_search_index(&profiles);
        assert_eq!(index[0].name, "Known Qty");
        assert_eq!(index[1].name, "Unknown Qty");
    }

    #[test]
    fn one_entry_per_profile() {
        let mut profiles = BTreeMap::new();
        profiles.insert(
            "Ausar Thompson".to_string(),
            PlayerProfile {
                team: Some("Overtime Elite".to_string()),
                pos: Some("F".to_string()),
                yr: Some(2023),
                ..Default::default()
            },
        );

        let index = build_search_index(&profiles);
        assert_eq!(index.len(), 1);
        assert_eq!(index[0].team, "Overtime Elite");
        assert_eq!(index[0].position, "F");
        assert_eq!(index[0].year, Some(2023));
    }
}
