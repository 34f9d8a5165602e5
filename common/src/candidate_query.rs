//! Shared candidate query models.

use serde::{Deserialize, Serialize};

use crate::candidate_filter::CandidateFilter;


/// One page-worth of the candidate query, as consumed by the query interface.
/// `offset` is always derived from page state, never stored on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CandidateQuery {
    pub filters: CandidateFilter,
    pub limit: u64,
    pub offset: u64,
}
