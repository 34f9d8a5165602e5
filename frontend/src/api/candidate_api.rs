//! Client API calls for the candidate query endpoint.

use common::candidate_query::CandidateQuery;
use common::candidate_result::CandidateResultSet;
use dioxus::prelude::*;


#[server]
pub async fn search_candidates(query: CandidateQuery) -> Result<CandidateResultSet, ServerFnError> {
    let x = backend::api::candidates::search_candidates(query).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
