//! REST API endpoints for the ProspectGateway
//!
//! This module provides the read-only query surface over the prospect
//! dataset: name search, player profiles, statistical and anthropometric
//! comparisons, tier probabilities, and ranked leaderboards.

use prospect_store::{Measurements, PlayerProfile, ProspectStore, SearchIndexEntry};
use query_engine::{AnthroQuery, SearchFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use warp::http::StatusCode;
use warp::Filter;

/// Custom error for not-found responses
#[derive(Debug)]
struct NotFoundError(ErrorResponse);

impl warp::reject::Reject for NotFoundError {}

/// Custom error for query parameters outside their declared bounds
#[derive(Debug)]
struct InvalidParameter(ErrorResponse);

impl warp::reject::Reject for InvalidParameter {}

/// Error response envelope
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

/// Error detail
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    fn new(code: &str, message: String, details: Option<serde_json::Value>) -> Self {
        Self {
            error: ErrorDetail { code: code.to_string(), message, details },
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

fn player_not_found(name: &str) -> warp::Rejection {
    warp::reject::custom(NotFoundError(ErrorResponse::new(
        "PLAYER_NOT_FOUND",
        format!("Player '{name}' not found"),
        Some(serde_json::json!({ "name": name })),
    )))
}

fn invalid_parameter(message: String) -> warp::Rejection {
    warp::reject::custom(InvalidParameter(ErrorResponse::new("INVALID_PARAMETER", message, None)))
}

/// Validate an optional count parameter against its declared bounds
fn bounded(value: Option<usize>, default: usize, max: usize, name: &str) -> Result<usize, warp::Rejection> {
    let value = value.unwrap_or(default);
    if value < 1 || value > max {
        return Err(invalid_parameter(format!("{name} must be between 1 and {max}")));
    }
    Ok(value)
}

/// Percent-decode a path segment; warp hands them over still encoded
fn decode_name(raw: &str) -> String {
    urlencoding::decode(raw).map(|s| s.into_owned()).unwrap_or_else(|_| raw.to_string())
}

/// Lightweight player record returned by every listing endpoint
#[derive(Debug, Serialize)]
pub struct PlayerSummary {
    pub name: String,
    pub team: String,
    pub position: String,
    pub year: Option<i32>,
    pub made_nba: bool,
    pub tier: String,
    pub pred_mu: Option<f64>,
    pub pred_p_nba: Option<f64>,
}

impl From<&SearchIndexEntry> for PlayerSummary {
    fn from(e: &SearchIndexEntry) -> Self {
        Self {
            name: e.name.clone(),
            team: e.team.clone(),
            position: e.position.clone(),
            year: e.year,
            made_nba: e.made_nba,
            tier: e.tier.clone(),
            pred_mu: e.pred_mu,
            pred_p_nba: e.pred_p_nba,
        }
    }
}

/// Search query parameters
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub nba_only: Option<bool>,
    pub position: Option<String>,
    pub year: Option<i32>,
    pub limit: Option<usize>,
}

/// Search response
#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub count: usize,
    pub results: Vec<PlayerSummary>,
}

/// Search players by name with optional filters
pub async fn search_players(
    params: SearchParams,
    store: Arc<ProspectStore>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let query = params.q.as_deref().unwrap_or("").trim().to_string();
    if query.is_empty() {
        return Err(invalid_parameter("q is required and must be at least 1 character".to_string()));
    }
    let limit = bounded(params.limit, 25, 100, "limit")?;

    let index = store.search_index().await;
    let filter = SearchFilter {
        query: &query,
        nba_only: params.nba_only.unwrap_or(false),
        position: params.position.as_deref(),
        year: params.year,
        limit,
    };
    let results: Vec<PlayerSummary> =
        query_engine::search(index, &filter).into_iter().map(PlayerSummary::from).collect();

    tracing::debug!("search q={:?} -> {} results", query, results.len());
    Ok(warp::reply::json(&SearchResponse { query, count: results.len(), results }))
}

/// Full profile response
#[derive(Serialize)]
struct ProfileResponse<'a> {
    name: &'a str,
    profile: &'a PlayerProfile,
}

/// Get a full player profile by name (case-insensitive)
pub async fn get_player(
    name: String,
    store: Arc<ProspectStore>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let name = decode_name(&name);
    let profiles = store.profiles().await;
    match prospect_store::resolve(profiles, &name) {
        Some((canonical, profile)) => {
            Ok(warp::reply::json(&ProfileResponse { name: canonical, profile }))
        }
        None => Err(player_not_found(&name)),
    }
}

/// Comp-list query parameters
#[derive(Debug, Deserialize)]
pub struct CompParams {
    pub nba_only: Option<bool>,
    pub limit: Option<usize>,
}

/// Statistical comps response
#[derive(Serialize)]
pub struct StatCompsResponse {
    pub player: String,
    pub count: usize,
    pub comps: Vec<query_engine::EnrichedStatComp>,
}

/// Get statistical comparisons for a player
pub async fn get_stat_comps(
    name: String,
    params: CompParams,
    store: Arc<ProspectStore>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let name = decode_name(&name);
    let limit = bounded(params.limit, 15, 50, "limit")?;

    let profiles = store.profiles().await;
    let (canonical, _) =
        prospect_store::resolve(profiles, &name).ok_or_else(|| player_not_found(&name))?;

    // No precomputed entry is a legitimate "no comps available" state
    let comp_entries = store.stat_comps().await;
    let comps = comp_entries.get(canonical).map(|e| e.comps.as_slice()).unwrap_or(&[]);

    let enriched =
        query_engine::stat_comps(comps, profiles, params.nba_only.unwrap_or(false), limit);
    Ok(warp::reply::json(&StatCompsResponse {
        player: canonical.to_string(),
        count: enriched.len(),
        comps: enriched,
    }))
}

/// Anthro-comp query parameters
#[derive(Debug, Deserialize)]
pub struct AnthroParams {
    pub nba_only: Option<bool>,
    pub weight_adj: Option<f64>,
    pub wingspan_adj: Option<f64>,
    pub limit: Option<usize>,
}

/// Slider adjustments echoed back to the client
#[derive(Serialize)]
pub struct Adjustments {
    pub weight: f64,
    pub wingspan: f64,
}

/// Anthropometric comps response
#[derive(Serialize)]
pub struct AnthroCompsResponse {
    pub player: String,
    pub measurements: Measurements,
    pub adjustments: Adjustments,
    pub count: usize,
    pub comps: Vec<prospect_store::AnthroComp>,
}

/// Get anthropometric comparisons, optionally re-ranked under weight and
/// wingspan slider adjustments
pub async fn get_anthro_comps(
    name: String,
    params: AnthroParams,
    store: Arc<ProspectStore>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let name = decode_name(&name);
    let limit = bounded(params.limit, 15, 50, "limit")?;

    let profiles = store.profiles().await;
    let (canonical, profile) =
        prospect_store::resolve(profiles, &name).ok_or_else(|| player_not_found(&name))?;

    let query = AnthroQuery {
        nba_only: params.nba_only.unwrap_or(false),
        weight_adj: params.weight_adj.unwrap_or(0.0),
        wingspan_adj: params.wingspan_adj.unwrap_or(0.0),
        limit,
    };

    let comp_entries = store.anthro_comps().await;
    let (measurements, comps) = match comp_entries.get(canonical) {
        Some(entry) => {
            (entry.measurements.clone(), query_engine::anthro_comps(entry, Some(profile), &query))
        }
        None => (Measurements::default(), Vec::new()),
    };

    Ok(warp::reply::json(&AnthroCompsResponse {
        player: canonical.to_string(),
        measurements,
        adjustments: Adjustments { weight: query.weight_adj, wingspan: query.wingspan_adj },
        count: comps.len(),
        comps,
    }))
}

/// Per-tier probability distribution, keyed by display name
#[derive(Serialize)]
pub struct TierProbabilities {
    #[serde(rename = "Superstar")]
    pub superstar: Option<f64>,
    #[serde(rename = "All-Star")]
    pub all_star: Option<f64>,
    #[serde(rename = "Starter")]
    pub starter: Option<f64>,
    #[serde(rename = "Role Player")]
    pub role_player: Option<f64>,
    #[serde(rename = "Replacement")]
    pub replacement: Option<f64>,
    #[serde(rename = "Negative")]
    pub negative: Option<f64>,
}

/// Realized outcome fields
#[derive(Serialize)]
pub struct ActualOutcome {
    pub made_nba: bool,
    pub tier: Option<String>,
    pub peak_pie: Option<f64>,
}

/// Tier prediction response
#[derive(Serialize)]
pub struct TiersResponse {
    pub player: String,
    pub pred_mu: Option<f64>,
    pub pred_sigma: Option<f64>,
    pub pred_p_nba: Option<f64>,
    pub pred_tier: Option<String>,
    pub tiers: TierProbabilities,
    pub actual: ActualOutcome,
}

/// Get the tier probability distribution for a player
pub async fn get_tiers(
    name: String,
    store: Arc<ProspectStore>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let name = decode_name(&name);
    let profiles = store.profiles().await;
    let (canonical, p) =
        prospect_store::resolve(profiles, &name).ok_or_else(|| player_not_found(&name))?;

    Ok(warp::reply::json(&TiersResponse {
        player: canonical.to_string(),
        pred_mu: p.pred_mu,
        pred_sigma: p.pred_sigma,
        pred_p_nba: p.pred_p_nba,
        pred_tier: p.pred_tier.clone(),
        tiers: TierProbabilities {
            superstar: p.prob_super,
            all_star: p.prob_allstar,
            starter: p.prob_starter,
            role_player: p.prob_role,
            replacement: p.prob_repl,
            negative: p.prob_neg,
        },
        actual: ActualOutcome {
            made_nba: p.made_nba,
            tier: p.tier.clone(),
            peak_pie: p.peak_pie,
        },
    }))
}

/// Top-players query parameters
#[derive(Debug, Deserialize)]
pub struct TopParams {
    pub n: Option<usize>,
    pub year: Option<i32>,
    pub position: Option<String>,
    pub nba_only: Option<bool>,
}

/// Leaderboard response
#[derive(Serialize)]
pub struct PlayersResponse {
    pub count: usize,
    pub players: Vec<PlayerSummary>,
}

/// Get the top N players by predicted PIE
pub async fn get_top_players(
    params: TopParams,
    store: Arc<ProspectStore>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let n = bounded(params.n, 50, 500, "n")?;
    let index = store.search_index().await;
    let players: Vec<PlayerSummary> = query_engine::top_players(
        index,
        n,
        params.year,
        params.position.as_deref(),
        params.nba_only.unwrap_or(false),
    )
    .into_iter()
    .map(PlayerSummary::from)
    .collect();

    Ok(warp::reply::json(&PlayersResponse { count: players.len(), players }))
}

/// Draft class query parameters
#[derive(Debug, Deserialize)]
pub struct DraftParams {
    pub position: Option<String>,
}

/// Draft class response
#[derive(Serialize)]
pub struct DraftClassResponse {
    pub year: i32,
    pub count: usize,
    pub players: Vec<PlayerSummary>,
}

/// Get all players from one draft year
pub async fn get_draft_class(
    year: i32,
    params: DraftParams,
    store: Arc<ProspectStore>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let index = store.search_index().await;
    let players: Vec<PlayerSummary> =
        query_engine::draft_class(index, year, params.position.as_deref())
            .into_iter()
            .map(PlayerSummary::from)
            .collect();

    Ok(warp::reply::json(&DraftClassResponse { year, count: players.len(), players }))
}

/// Board query parameters
#[derive(Debug, Deserialize)]
pub struct BoardParams {
    pub n: Option<usize>,
    pub year: Option<i32>,
    pub position: Option<String>,
}

/// One big-board row: summary scouting and model fields for a prospect
#[derive(Serialize)]
pub struct BoardEntry {
    pub name: String,
    pub team: String,
    pub pos: String,
    pub yr: Option<i32>,
    pub cls: String,
    pub conf: String,
    pub conf_tier: String,
    pub ht: Option<f64>,
    pub age: Option<f64>,
    #[serde(rename = "recRank")]
    pub rec_rank: Option<f64>,
    pub overall: Option<f64>,
    pub floor: Option<f64>,
    pub ceiling: Option<f64>,
    pub risk: Option<f64>,
    pub safe_bet: Option<f64>,
    pub feel: Option<f64>,
    pub func_ath: Option<f64>,
    pub shoot_score: Option<f64>,
    pub def_score: Option<f64>,
    pub mu: Option<f64>,
    #[serde(rename = "pNba")]
    pub p_nba: Option<f64>,
    pub pred_tier: Option<String>,
    pub badges: String,
    pub red_flags: String,
    pub bpm: Option<f64>,
    pub confidence: String,
    pub sample_min: Option<f64>,
    pub made_nba: bool,
    pub tier: String,
    pub peak_pie: Option<f64>,
}

impl BoardEntry {
    fn from_profile(name: &str, p: &PlayerProfile) -> Self {
        Self {
            name: name.to_string(),
            team: p.team.clone().unwrap_or_default(),
            pos: p.pos.clone().unwrap_or_default(),
            yr: p.yr,
            cls: p.cls.clone().unwrap_or_default(),
            conf: p.conf.clone().unwrap_or_default(),
            conf_tier: p.conf_tier.clone().unwrap_or_default(),
            ht: p.ht,
            age: p.age,
            rec_rank: p.rec_rank,
            overall: p.overall,
            floor: p.floor,
            ceiling: p.ceiling,
            risk: p.risk,
            safe_bet: p.safe_bet,
            feel: p.feel,
            func_ath: p.func_ath,
            shoot_score: p.shoot_score,
            def_score: p.def_score,
            mu: p.pred_mu,
            p_nba: p.pred_p_nba,
            pred_tier: p.pred_tier.clone(),
            badges: p.badges.clone().unwrap_or_default(),
            red_flags: p.red_flags.clone().unwrap_or_default(),
            bpm: p.bpm,
            confidence: p.confidence.clone().unwrap_or_else(|| "full".to_string()),
            sample_min: p.sample_min,
            made_nba: p.made_nba,
            tier: p.tier.clone().unwrap_or_default(),
            peak_pie: p.peak_pie,
        }
    }
}

/// Board response
#[derive(Serialize)]
pub struct BoardResponse {
    pub count: usize,
    pub players: Vec<BoardEntry>,
}

/// Get the big board: top N prospects by ceiling, then overall
pub async fn get_board(
    params: BoardParams,
    store: Arc<ProspectStore>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let n = bounded(params.n, 200, 1000, "n")?;
    let profiles = store.profiles().await;
    let players: Vec<BoardEntry> =
        query_engine::board(profiles, n, params.year, params.position.as_deref())
            .into_iter()
            .map(|(name, p)| BoardEntry::from_profile(name, p))
            .collect();

    Ok(warp::reply::json(&BoardResponse { count: players.len(), players }))
}

/// Health response: per-collection record counts
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub profiles: usize,
    pub stat_comps: usize,
    pub anthro_comps: usize,
    pub search_index: usize,
}

/// Health check; touching every collection also forces the lazy loads
pub async fn health(store: Arc<ProspectStore>) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(warp::reply::json(&HealthResponse {
        status: "ok".to_string(),
        profiles: store.profiles().await.len(),
        stat_comps: store.stat_comps().await.len(),
        anthro_comps: store.anthro_comps().await.len(),
        search_index: store.search_index().await.len(),
    }))
}

/// Map custom rejections onto the JSON error envelope
pub async fn handle_rejection(
    err: warp::Rejection,
) -> Result<impl warp::Reply, std::convert::Infallible> {
    let (status, body) = if let Some(NotFoundError(resp)) = err.find::<NotFoundError>() {
        (StatusCode::NOT_FOUND, resp.clone())
    } else if let Some(InvalidParameter(resp)) = err.find::<InvalidParameter>() {
        (StatusCode::UNPROCESSABLE_ENTITY, resp.clone())
    } else if err.find::<warp::reject::InvalidQuery>().is_some() {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            ErrorResponse::new(
                "INVALID_PARAMETER",
                "Invalid query parameters".to_string(),
                None,
            ),
        )
    } else if err.is_not_found() {
        (
            StatusCode::NOT_FOUND,
            ErrorResponse::new("NOT_FOUND", "Resource not found".to_string(), None),
        )
    } else {
        tracing::error!("Unhandled rejection: {:?}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new("INTERNAL_ERROR", "Internal server error".to_string(), None),
        )
    };

    Ok(warp::reply::with_status(warp::reply::json(&body), status))
}

/// Create REST API routes
pub fn create_routes(
    store: Arc<ProspectStore>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let store_filter = warp::any().map(move || store.clone());

    // Player search endpoint
    let search = warp::path("api")
        .and(warp::path("players"))
        .and(warp::path("search"))
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<SearchParams>())
        .and(store_filter.clone())
        .and_then(search_players);

    // Top players endpoint
    let top = warp::path("api")
        .and(warp::path("players"))
        .and(warp::path("top"))
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<TopParams>())
        .and(store_filter.clone())
        .and_then(get_top_players);

    // Draft class endpoint
    let draft = warp::path("api")
        .and(warp::path("players"))
        .and(warp::path("draft"))
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<DraftParams>())
        .and(store_filter.clone())
        .and_then(get_draft_class);

    // Full profile endpoint
    let player = warp::path("api")
        .and(warp::path("player"))
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::get())
        .and(store_filter.clone())
        .and_then(get_player);

    // Statistical comps endpoint
    let stat_comps = warp::path("api")
        .and(warp::path("comps"))
        .and(warp::path("stats"))
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<CompParams>())
        .and(store_filter.clone())
        .and_then(get_stat_comps);

    // Anthropometric comps endpoint
    let anthro_comps = warp::path("api")
        .and(warp::path("comps"))
        .and(warp::path("anthro"))
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<AnthroParams>())
        .and(store_filter.clone())
        .and_then(get_anthro_comps);

    // Tier probabilities endpoint
    let tiers = warp::path("api")
        .and(warp::path("tiers"))
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::get())
        .and(store_filter.clone())
        .and_then(get_tiers);

    // Big board endpoint
    let board = warp::path("api")
        .and(warp::path("board"))
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<BoardParams>())
        .and(store_filter.clone())
        .and_then(get_board);

    // Health check endpoint
    let health_route = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .and(store_filter)
        .and_then(health);

    // API index
    let root = warp::path::end().and(warp::get()).map(|| {
        warp::reply::json(&serde_json::json!({
            "name": "ProspectTheory API",
            "version": crate::VERSION,
            "endpoints": [
                "/api/players/search?q=wemb",
                "/api/player/{name}",
                "/api/comps/stats/{name}",
                "/api/comps/anthro/{name}",
                "/api/tiers/{name}",
                "/api/players/top?n=50",
                "/api/players/draft/{year}",
                "/api/board?n=200",
                "/health",
            ],
        }))
    });

    search
        .or(top)
        .or(draft)
        .or(player)
        .or(stat_comps)
        .or(anthro_comps)
        .or(tiers)
        .or(board)
        .or(health_route)
        .or(root)
        .recover(handle_rejection)
        .with(
            warp::cors()
                .allow_any_origin()
                .allow_headers(vec!["content-type"])
                .allow_methods(vec!["GET", "OPTIONS"]),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use prospect_store::{AnthroComp, AnthroCompEntry, StatComp, StatCompEntry};
    use serde_json::Value;
    use std::collections::BTreeMap;

    fn fixture_store() -> Arc<ProspectStore> {
        let mut profiles = BTreeMap::new();
        profiles.insert(
            "Victor Wembanyama".to_string(),
            PlayerProfile {
                team: Some("Metropolitans 92".to_string()),
                pos: Some("C".to_string()),
                yr: Some(2023),
                made_nba: true,
                pred_mu: Some(9.5),
                pred_p_nba: Some(0.99),
                pred_sigma: Some(1.1),
                pred_tier: Some("Superstar".to_string()),
                prob_super: Some(0.62),
                ceiling: Some(99.0),
                overall: Some(97.0),
                wt: Some(220.0),
                ht: Some(88.0),
                ..Default::default()
            },
        );
        profiles.insert(
            "Scoot Henderson".to_string(),
            PlayerProfile {
                team: Some("G League Ignite".to_string()),
                pos: Some("G".to_string()),
                yr: Some(2023),
                made_nba: true,
                pred_mu: Some(7.8),
                pred_p_nba: Some(0.97),
                ceiling: Some(91.0),
                overall: Some(88.0),
                bpm: Some(8.4),
                badges: Some("Downhill Driver".to_string()),
                ..Default::default()
            },
        );
        profiles.insert(
            "Tiny Sample".to_string(),
            PlayerProfile {
                yr: Some(2023),
                ceiling: Some(100.0),
                overall: Some(100.0),
                confidence: Some("very_low".to_string()),
                ..Default::default()
            },
        );

        let mut stat_comps = BTreeMap::new();
        stat_comps.insert(
            "Victor Wembanyama".to_string(),
            StatCompEntry {
                comps: vec![
                    StatComp {
                        name: "Scoot Henderson".to_string(),
                        position: None,
                        similarity: Some(0.61),
                        made_nba: true,
                        tier: None,
                    },
                    StatComp {
                        name: "Never Made It".to_string(),
                        position: Some("C".to_string()),
                        similarity: Some(0.58),
                        made_nba: false,
                        tier: None,
                    },
                ],
            },
        );

        let mut anthro_comps = BTreeMap::new();
        anthro_comps.insert(
            "Victor Wembanyama".to_string(),
            AnthroCompEntry {
                measurements: prospect_store::Measurements {
                    height: Some(88.0),
                    weight: Some(220.0),
                    wingspan: Some(96.0),
                },
                comps: vec![
                    AnthroComp {
                        name: "Rudy Gobert".to_string(),
                        height: Some(85.0),
                        weight: Some(258.0),
                        wingspan: Some(92.5),
                        made_nba: true,
                        tier: Some("All-Star".to_string()),
                        distance: Some(2.0),
                    },
                    AnthroComp {
                        name: "Close Frame".to_string(),
                        height: Some(88.0),
                        weight: Some(230.0),
                        wingspan: Some(96.0),
                        made_nba: false,
                        tier: None,
                        distance: Some(5.0),
                    },
                ],
            },
        );

        let index = vec![
            SearchIndexEntry {
                name: "Victor Wembanyama".to_string(),
                team: "Metropolitans 92".to_string(),
                position: "C".to_string(),
                year: Some(2023),
                made_nba: true,
                tier: "Superstar".to_string(),
                pred_mu: Some(9.5),
                pred_p_nba: Some(0.99),
            },
            SearchIndexEntry {
                name: "Scoot Henderson".to_string(),
                team: "G League Ignite".to_string(),
                position: "G".to_string(),
                year: Some(2023),
                made_nba: true,
                tier: "Starter".to_string(),
                pred_mu: Some(7.8),
                pred_p_nba: Some(0.97),
            },
        ];

        Arc::new(ProspectStore::with_data(profiles, stat_comps, anthro_comps, index))
    }

    async fn get_json(path: &str) -> (StatusCode, Value) {
        let routes = create_routes(fixture_store());
        let res = warp::test::request().method("GET").path(path).reply(&routes).await;
        let status = res.status();
        let body: Value = serde_json::from_slice(res.body()).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn search_finds_wembanyama() {
        let (status, body) = get_json("/api/players/search?q=wemb").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 1);
        assert_eq!(body["results"][0]["name"], "Victor Wembanyama");
    }

    #[tokio::test]
    async fn search_without_query_is_422() {
        let (status, body) = get_json("/api/players/search").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "INVALID_PARAMETER");
    }

    #[tokio::test]
    async fn search_limit_out_of_bounds_is_422() {
        let (status, _) = get_json("/api/players/search?q=a&limit=0").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let (status, _) = get_json("/api/players/search?q=a&limit=101").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn lowercase_name_resolves_to_canonical() {
        let (status, body) = get_json("/api/player/victor%20wembanyama").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Victor Wembanyama");
        assert_eq!(body["profile"]["team"], "Metropolitans 92");
    }

    #[tokio::test]
    async fn unknown_player_is_404_with_name_echoed() {
        let (status, body) = get_json("/api/player/NoSuchPlayer").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"]["message"].as_str().unwrap().contains("NoSuchPlayer"));
    }

    #[tokio::test]
    async fn stat_comps_are_enriched_from_profiles() {
        let (status, body) = get_json("/api/comps/stats/victor%20wembanyama").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["player"], "Victor Wembanyama");
        assert_eq!(body["count"], 2);
        let first = &body["comps"][0];
        assert_eq!(first["name"], "Scoot Henderson");
        // position and stats pulled from the candidate's own profile
        assert_eq!(first["position"], "G");
        assert_eq!(first["bpm"], 8.4);
        assert_eq!(first["badges"], "Downhill Driver");
    }

    #[tokio::test]
    async fn stat_comps_nba_only_filters() {
        let (_, body) = get_json("/api/comps/stats/Victor%20Wembanyama?nba_only=true").await;
        assert_eq!(body["count"], 1);
        assert_eq!(body["comps"][0]["name"], "Scoot Henderson");
    }

    #[tokio::test]
    async fn anthro_zero_adjustments_preserve_stored_order() {
        let (status, body) = get_json("/api/comps/anthro/Victor%20Wembanyama").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["comps"][0]["name"], "Rudy Gobert");
        assert_eq!(body["comps"][0]["distance"], 2.0);
        assert_eq!(body["adjustments"]["weight"], 0.0);
    }

    #[tokio::test]
    async fn anthro_adjustment_reranks_by_recomputed_distance() {
        let (status, body) =
            get_json("/api/comps/anthro/Victor%20Wembanyama?weight_adj=20").await;
        assert_eq!(status, StatusCode::OK);
        // effective base weight 240: Close Frame (230 lbs, same frame
        // otherwise) is now nearer than Gobert
        assert_eq!(body["comps"][0]["name"], "Close Frame");
        let d0 = body["comps"][0]["distance"].as_f64().unwrap();
        let d1 = body["comps"][1]["distance"].as_f64().unwrap();
        assert!(d0 <= d1);
        assert!((d0 - 5.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn tiers_returns_distribution_and_outcomes() {
        let (status, body) = get_json("/api/tiers/Victor%20Wembanyama").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["player"], "Victor Wembanyama");
        assert_eq!(body["pred_mu"], 9.5);
        assert_eq!(body["tiers"]["Superstar"], 0.62);
        assert_eq!(body["actual"]["made_nba"], true);
    }

    #[tokio::test]
    async fn top_players_sorted_by_mu() {
        let (status, body) = get_json("/api/players/top?n=10").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["players"][0]["name"], "Victor Wembanyama");
        assert_eq!(body["players"][1]["name"], "Scoot Henderson");
    }

    #[tokio::test]
    async fn draft_class_returns_year() {
        let (status, body) = get_json("/api/players/draft/2023").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["year"], 2023);
        assert_eq!(body["count"], 2);
    }

    #[tokio::test]
    async fn board_excludes_very_low_confidence() {
        let (status, body) = get_json("/api/board?n=1").await;
        assert_eq!(status, StatusCode::OK);
        // Tiny Sample has the highest ceiling but very_low confidence
        assert_eq!(body["players"][0]["name"], "Victor Wembanyama");
    }

    #[tokio::test]
    async fn health_reports_collection_counts() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["profiles"], 3);
        assert_eq!(body["stat_comps"], 1);
        assert_eq!(body["anthro_comps"], 1);
        assert_eq!(body["search_index"], 2);
    }
}
