//! Statistical and anthropometric comparison queries

use prospect_store::{AnthroComp, AnthroCompEntry, PlayerProfile, StatComp};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Fallbacks when neither the measurement snapshot nor the profile carries
/// a value, matching the upstream comp-generation defaults
const DEFAULT_WEIGHT_LBS: f64 = 200.0;
const DEFAULT_HEIGHT_IN: f64 = 78.0;

/// Distance weights for the anthropometric recompute: wingspan differences
/// matter most, weight least
const HEIGHT_WEIGHT: f64 = 1.0;
const WEIGHT_WEIGHT: f64 = 0.5;
const WINGSPAN_WEIGHT: f64 = 1.5;

/// A statistical comp joined with fields from the candidate's own profile,
/// so the client never needs a second request per candidate.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedStatComp {
    pub name: String,
    pub position: String,
    pub similarity: f64,
    pub made_nba: bool,
    pub tier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bpm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ast_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blk_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stl_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badges: Option<String>,
}

/// Filter, truncate, and enrich a precomputed statistical comp list.
///
/// The comp record's own position/tier win; the candidate's profile fills
/// the gaps and supplies the fixed comparison-stat set. An absent comp
/// entry upstream is a legitimate "no comps available" state, so callers
/// pass an empty slice rather than failing.
pub fn stat_comps(
    comps: &[StatComp],
    profiles: &BTreeMap<String, PlayerProfile>,
    nba_only: bool,
    limit: usize,
) -> Vec<EnrichedStatComp> {
    comps
        .iter()
        .filter(|c| !nba_only || c.made_nba)
        .take(limit)
        .map(|c| {
            let profile = profiles.get(&c.name);
            EnrichedStatComp {
                name: c.name.clone(),
                position: c
                    .position
                    .clone()
                    .or_else(|| profile.and_then(|p| p.pos.clone()))
                    .unwrap_or_default(),
                similarity: c.similarity.unwrap_or(0.0),
                made_nba: c.made_nba,
                tier: c
                    .tier
                    .clone()
                    .or_else(|| profile.and_then(|p| p.tier.clone()))
                    .unwrap_or_default(),
                bpm: profile.and_then(|p| p.bpm),
                usg: profile.and_then(|p| p.usg),
                ts: profile.and_then(|p| p.ts),
                ast_p: profile.and_then(|p| p.ast_p),
                blk_p: profile.and_then(|p| p.blk_p),
                stl_p: profile.and_then(|p| p.stl_p),
                overall: profile.and_then(|p| p.overall),
                badges: profile.and_then(|p| p.badges.clone()),
            }
        })
        .collect()
}

/// Parameters for an anthropometric comp query
#[derive(Debug, Clone, Copy, Default)]
pub struct AnthroQuery {
    pub nba_only: bool,
    /// Weight slider, lbs added to the subject's base weight
    pub weight_adj: f64,
    /// Wingspan slider, inches added to the subject's base wingspan
    pub wingspan_adj: f64,
    pub limit: usize,
}

/// Anthropometric comps, optionally re-ranked under slider adjustments.
///
/// With both adjustments zero the precomputed order and distances pass
/// through untouched. Otherwise every candidate's weighted Euclidean
/// distance to the adjusted measurements is recomputed into request-local
/// copies (the cached comp list is never written to), the list re-sorts
/// ascending by that distance, and only then do the nba_only filter and
/// limit apply.
pub fn anthro_comps(
    entry: &AnthroCompEntry,
    profile: Option<&PlayerProfile>,
    query: &AnthroQuery,
) -> Vec<AnthroComp> {
    let adjusted = query.weight_adj != 0.0 || query.wingspan_adj != 0.0;

    let ranked: Vec<AnthroComp> = if adjusted {
        let m = &entry.measurements;
        let base_height = m.height.or(profile.and_then(|p| p.ht)).unwrap_or(DEFAULT_HEIGHT_IN);
        let base_weight = m.weight.or(profile.and_then(|p| p.wt)).unwrap_or(DEFAULT_WEIGHT_LBS)
            + query.weight_adj;
        let base_wingspan = m.wingspan.unwrap_or(0.0) + query.wingspan_adj;

        let mut scored: Vec<(AnthroComp, f64)> = entry
            .comps
            .iter()
            .map(|c| {
                let d = weighted_distance(c, base_height, base_weight, base_wingspan);
                (c.clone(), d)
            })
            .collect();
        scored.sort_by(|(_, a), (_, b)| a.total_cmp(b));
        debug!(
            comps = scored.len(),
            weight_adj = query.weight_adj,
            wingspan_adj = query.wingspan_adj,
            "re-ranked anthro comps"
        );

        scored
            .into_iter()
            .map(|(mut comp, d)| {
                comp.distance = Some(d);
                comp
            })
            .collect()
    } else {
        entry.comps.to_vec()
    };

    ranked
        .into_iter()
        .filter(|c| !query.nba_only || c.made_nba)
        .take(query.limit)
        .collect()
}

/// Weighted Euclidean distance between a candidate and the (possibly
/// adjusted) base measurements. A candidate missing a measurement falls
/// back to the base value, contributing a zero delta.
fn weighted_distance(comp: &AnthroComp, height: f64, weight: f64, wingspan: f64) -> f64 {
    let height_d = (comp.height.unwrap_or(height) - height).abs() * HEIGHT_WEIGHT;
    let weight_d = (comp.weight.unwrap_or(weight) - weight).abs() * WEIGHT_WEIGHT;
    let wingspan_d = (comp.wingspan.unwrap_or(wingspan) - wingspan).abs() * WINGSPAN_WEIGHT;
    (height_d.powi(2) + weight_d.powi(2) + wingspan_d.powi(2)).sqrt()
}
