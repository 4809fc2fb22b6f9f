//! Query Engine - Pure read queries over the prospect store
//!
//! Every function here is a pure computation over borrowed store data: the
//! gateway hands in references to the cached collections and gets back
//! filtered/sorted/truncated views or request-local copies. Nothing in this
//! crate performs I/O or mutates shared state.

pub mod comps;
pub mod listing;

pub use comps::{anthro_comps, stat_comps, AnthroQuery, EnrichedStatComp};
pub use listing::{board, draft_class, search, top_players, SearchFilter};
