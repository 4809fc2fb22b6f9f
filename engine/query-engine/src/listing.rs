//! Search, leaderboard, draft-class, and big-board listings

use prospect_store::{metric_or_zero, PlayerProfile, SearchIndexEntry};
use std::collections::BTreeMap;

/// Filters for a name search over the index
#[derive(Debug, Default)]
pub struct SearchFilter<'a> {
    /// Case-insensitive substring to match against names; empty matches all
    pub query: &'a str,
    pub nba_only: bool,
    pub position: Option<&'a str>,
    pub year: Option<i32>,
    pub limit: usize,
}

/// Substring name search over the pre-sorted index.
///
/// Filters apply in order: substring match, nba_only, position, year. The
/// scan stops as soon as `limit` entries match, so results keep the index's
/// existing order rather than being re-ranked by relevance.
pub fn search<'a>(
    index: &'a [SearchIndexEntry],
    filter: &SearchFilter<'_>,
) -> Vec<&'a SearchIndexEntry> {
    let needle = filter.query.trim().to_lowercase();
    let mut results = Vec::new();

    for entry in index {
        if !needle.is_empty() && !entry.name.to_lowercase().contains(&needle) {
            continue;
        }
        if filter.nba_only && !entry.made_nba {
            continue;
        }
        if let Some(position) = filter.position {
            if entry.position != position {
                continue;
            }
        }
        if let Some(year) = filter.year {
            if entry.year != Some(year) {
                continue;
            }
        }
        results.push(entry);
        if results.len() >= filter.limit {
            break;
        }
    }

    results
}

/// Top N players by predicted mean PIE, descending.
pub fn top_players<'a>(
    index: &'a [SearchIndexEntry],
    n: usize,
    year: Option<i32>,
    position: Option<&str>,
    nba_only: bool,
) -> Vec<&'a SearchIndexEntry> {
    let mut results: Vec<&SearchIndexEntry> = index
        .iter()
        .filter(|e| !nba_only || e.made_nba)
        .filter(|e| position.map_or(true, |p| e.position == p))
        .filter(|e| year.map_or(true, |y| e.year == Some(y)))
        .collect();

    results
        .sort_by(|a, b| metric_or_zero(b.pred_mu).total_cmp(&metric_or_zero(a.pred_mu)));
    results.truncate(n);
    results
}

/// Every indexed player from one draft year, best prospects first
/// (predicted mean PIE descending, NBA probability as tiebreak).
pub fn draft_class<'a>(
    index: &'a [SearchIndexEntry],
    year: i32,
    position: Option<&str>,
) -> Vec<&'a SearchIndexEntry> {
    let mut results: Vec<&SearchIndexEntry> = index
        .iter()
        .filter(|e| e.year == Some(year))
        .filter(|e| position.map_or(true, |p| e.position == p))
        .collect();

    results.sort_by(|a, b| {
        metric_or_zero(b.pred_mu)
            .total_cmp(&metric_or_zero(a.pred_mu))
            .then_with(|| metric_or_zero(b.pred_p_nba).total_cmp(&metric_or_zero(a.pred_p_nba)))
    });
    results
}

/// Big-board ranking over the full profile store: ceiling descending, then
/// overall descending. Profiles flagged `confidence == "very_low"` carry
/// too small a sample to rank and are excluded outright.
pub fn board<'a>(
    profiles: &'a BTreeMap<String, PlayerProfile>,
    n: usize,
    year: Option<i32>,
    position: Option<&str>,
) -> Vec<(&'a str, &'a PlayerProfile)> {
    let mut rows: Vec<(&str, &PlayerProfile)> = profiles
        .iter()
        .filter(|(_, p)| year.map_or(true, |y| p.yr == Some(y)))
        .filter(|(_, p)| position.map_or(true, |pos| p.pos.as_deref() == Some(pos)))
        .filter(|(_, p)| p.confidence.as_deref() != Some("very_low"))
        .map(|(name, p)| (name.as_str(), p))
        .collect();

    rows.sort_by(|(_, a), (_, b)| {
        metric_or_zero(b.ceiling)
            .total_cmp(&metric_or_zero(a.ceiling))
            .then_with(|| metric_or_zero(b.overall).total_cmp(&metric_or_zero(a.overall)))
    });
    rows.truncate(n);
    rows
}
