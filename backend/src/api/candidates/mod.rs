//! Candidate query handlers and module exports.

mod search_candidates;
pub use search_candidates::search_candidates;

pub mod candidates_gql;
