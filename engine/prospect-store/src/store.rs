//! Lazily-loaded, process-lifetime cache of the four data artifacts
//!
//! Each collection is loaded from its JSON file on first access and held
//! for the lifetime of the store. A missing artifact degrades to an empty
//! collection with a warning; the service stays up and answers what it can.

use crate::index::build_search_index;
use crate::types::{AnthroCompEntry, PlayerProfile, SearchIndexEntry, StatCompEntry};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{info, warn};

/// Artifact filenames emitted by the upstream pipeline
pub const PROFILES_FILE: &str = "api_profiles.json";
pub const STAT_COMPS_FILE: &str = "api_stat_comps.json";
pub const ANTHRO_COMPS_FILE: &str = "api_anthro_comps.json";
pub const SEARCH_INDEX_FILE: &str = "api_search_index.json";

/// Errors that can occur while loading an artifact
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only store over the precomputed prospect artifacts.
///
/// Collections load lazily on first access; `tokio::sync::OnceCell` gives
/// single-flight initialization, so concurrent first requests never load an
/// artifact twice or observe a half-populated cache. Profiles live in a
/// `BTreeMap` so iteration order is fixed, which makes case-insensitive
/// resolution deterministic (see [`crate::resolver::resolve`]).
pub struct ProspectStore {
    data_dir: PathBuf,
    profiles: OnceCell<BTreeMap<String, PlayerProfile>>,
    stat_comps: OnceCell<BTreeMap<String, StatCompEntry>>,
    anthro_comps: OnceCell<BTreeMap<String, AnthroCompEntry>>,
    search_index: OnceCell<Vec<SearchIndexEntry>>,
}

impl ProspectStore {
    /// Create a store reading artifacts from `data_dir`; nothing is loaded
    /// until a collection is first requested
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
            profiles: OnceCell::new(),
            stat_comps: OnceCell::new(),
            anthro_comps: OnceCell::new(),
            search_index: OnceCell::new(),
        }
    }

    /// Build a store from in-memory collections, bypassing the filesystem.
    /// Intended for tests that need isolated fixture data.
    pub fn with_data(
        profiles: BTreeMap<String, PlayerProfile>,
        stat_comps: BTreeMap<String, StatCompEntry>,
        anthro_comps: BTreeMap<String, AnthroCompEntry>,
        search_index: Vec<SearchIndexEntry>,
    ) -> Self {
        Self {
            data_dir: PathBuf::new(),
            profiles: OnceCell::new_with(Some(profiles)),
            stat_comps: OnceCell::new_with(Some(stat_comps)),
            anthro_comps: OnceCell::new_with(Some(anthro_comps)),
            search_index: OnceCell::new_with(Some(search_index)),
        }
    }

    /// Directory the store reads artifacts from
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Player profiles keyed by canonical name
    pub async fn profiles(&self) -> &BTreeMap<String, PlayerProfile> {
        self.profiles
            .get_or_init(|| async {
                let path = self.data_dir.join(PROFILES_FILE);
                match load_json::<BTreeMap<String, PlayerProfile>>(&path).await {
                    Ok(map) => {
                        info!("Loaded {} player profiles from {}", map.len(), path.display());
                        map
                    }
                    Err(e) => {
                        warn!("Profile artifact unavailable at {}: {}", path.display(), e);
                        BTreeMap::new()
                    }
                }
            })
            .await
    }

    /// Statistical comparison entries keyed by subject name
    pub async fn stat_comps(&self) -> &BTreeMap<String, StatCompEntry> {
        self.stat_comps
            .get_or_init(|| async {
                let path = self.data_dir.join(STAT_COMPS_FILE);
                match load_json::<BTreeMap<String, StatCompEntry>>(&path).await {
                    Ok(map) => {
                        info!("Loaded {} stat comp entries from {}", map.len(), path.display());
                        map
                    }
                    Err(e) => {
                        warn!("Stat comps artifact unavailable at {}: {}", path.display(), e);
                        BTreeMap::new()
                    }
                }
            })
            .await
    }

    /// Anthropometric comparison entries keyed by subject name
    pub async fn anthro_comps(&self) -> &BTreeMap<String, AnthroCompEntry> {
        self.anthro_comps
            .get_or_init(|| async {
                let path = self.data_dir.join(ANTHRO_COMPS_FILE);
                match load_json::<BTreeMap<String, AnthroCompEntry>>(&path).await {
                    Ok(map) => {
                        info!("Loaded {} anthro comp entries from {}", map.len(), path.display());
                        map
                    }
                    Err(e) => {
                        warn!("Anthro comps artifact unavailable at {}: {}", path.display(), e);
                        BTreeMap::new()
                    }
                }
            })
            .await
    }

    /// Pre-sorted lightweight search index. Falls back to deriving one from
    /// the profile store when the artifact is missing or malformed.
    pub async fn search_index(&self) -> &[SearchIndexEntry] {
        self.search_index
            .get_or_init(|| async {
                let path = self.data_dir.join(SEARCH_INDEX_FILE);
                match load_json::<Vec<SearchIndexEntry>>(&path).await {
                    Ok(index) => {
                        info!("Loaded search index: {} players", index.len());
                        index
                    }
                    Err(e) => {
                        warn!(
                            "Search index artifact unavailable at {} ({}), deriving from profiles",
                            path.display(),
                            e
                        );
                        let index = build_search_index(self.profiles().await);
                        info!("Derived search index: {} players", index.len());
                        index
                    }
                }
            })
            .await
    }
}

async fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let raw = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}
