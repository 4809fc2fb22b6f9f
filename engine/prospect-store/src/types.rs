use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Full stored attribute record for one player, keyed by canonical name.
///
/// Every numeric field is optional: the upstream pipeline only emits what it
/// could compute, and an absent value means "unknown", not zero. Ranking
/// code must go through [`metric_or_zero`] when it needs a sortable number.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerProfile {
    // Biographical
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
    /// Season / draft year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yr: Option<i32>,
    /// Class (Fr, So, Jr, Sr)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cls: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conf_tier: Option<String>,
    /// Height in inches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ht: Option<f64>,
    /// Weight in lbs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wt: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    /// Recruiting rank
    #[serde(rename = "recRank", skip_serializing_if = "Option::is_none")]
    pub rec_rank: Option<f64>,

    // Box-score and advanced stats
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
    /// Minutes underlying the sample
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_min: Option<f64>,

    // Scouting scores
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ceiling: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safe_bet: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feel: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub func_ath: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shoot_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub def_score: Option<f64>,

    // Model outputs
    /// Predicted mean peak performance (PIE)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pred_mu: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pred_sigma: Option<f64>,
    /// Predicted probability of reaching the NBA
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pred_p_nba: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pred_tier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prob_super: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prob_allstar: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prob_starter: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prob_role: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prob_repl: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prob_neg: Option<f64>,

    // Realized outcomes
    #[serde(deserialize_with = "de_flag")]
    pub made_nba: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    /// Peak realized PIE
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_pie: Option<f64>,

    // Descriptive tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badges: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub red_flags: Option<String>,
    /// Prediction confidence level; "very_low" marks insufficient sample
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
}

/// One statistical comparison candidate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatComp {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
    #[serde(deserialize_with = "de_flag")]
    pub made_nba: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
}

/// Statistical comparison list for one subject player, similarity-ranked
/// upstream. Never contains the subject itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatCompEntry {
    pub comps: Vec<StatComp>,
}

/// Combine-style measurements, all in inches / lbs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Measurements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wingspan: Option<f64>,
}

/// One anthropometric comparison candidate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnthroComp {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wingspan: Option<f64>,
    #[serde(deserialize_with = "de_flag")]
    pub made_nba: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    /// Physical-similarity distance; replaced on a per-request copy when
    /// slider adjustments trigger a recompute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

/// Anthropometric comparison entry for one subject player
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnthroCompEntry {
    pub measurements: Measurements,
    pub comps: Vec<AnthroComp>,
}

/// Lightweight denormalized projection of a profile, used for fast listing.
/// The artifact uses compressed single-letter keys to keep the file small.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchIndexEntry {
    #[serde(rename = "n")]
    pub name: String,
    #[serde(rename = "t")]
    pub team: String,
    #[serde(rename = "p")]
    pub position: String,
    #[serde(rename = "y")]
    pub year: Option<i32>,
    #[serde(rename = "nba", deserialize_with = "de_flag")]
    pub made_nba: bool,
    pub tier: String,
    #[serde(rename = "mu")]
    pub pred_mu: Option<f64>,
    #[serde(rename = "pn")]
    pub pred_p_nba: Option<f64>,
}

/// Sortable value for an optional metric.
///
/// Missing numeric fields sort as 0 so incomplete records fall to the
/// bottom of descending rankings instead of breaking comparisons. This is
/// the only place absent-value defaulting for ordering happens.
pub fn metric_or_zero(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

/// Accept a made-NBA flag encoded as bool, 0/1, or null.
///
/// Older artifact revisions wrote the flag as an integer column; newer ones
/// write a real boolean.
fn de_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(b),
        Some(Value::Number(n)) => Ok(n.as_f64().unwrap_or(0.0) != 0.0),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected bool or number for flag, got {other}"
        ))),
    }
}
