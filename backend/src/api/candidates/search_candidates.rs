//! Candidate search endpoint.

use common::candidate_query::CandidateQuery;
use common::candidate_result::{Candidate, CandidateResultSet};
use serde::Deserialize;

use crate::api::candidates::candidates_gql::{GET_CANDIDATES_QUERY, build_query_variables};
use crate::db_utils::graphql_utils::graphql_request;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchCandidatesResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    candidates_count: u64,
}

/// Runs one candidate query against the upstream API. The page of records
/// and the total count come back from a single operation.
pub async fn search_candidates(query: CandidateQuery) -> anyhow::Result<CandidateResultSet> {
    tracing::debug!(limit = query.limit, offset = query.offset, "candidate search");
    let variables = build_query_variables(&query)?;
    let response: SearchCandidatesResponse =
        graphql_request(GET_CANDIDATES_QUERY, variables).await?;
    Ok(CandidateResultSet {
        candidates: response.candidates,
        total_count: response.candidates_count,
    })
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_payload_maps_into_the_result_set() {
        let payload = r#"{
            "candidates": [
                {
                    "slug": "jane-doe",
                    "name": "Jane Doe",
                    "age": 31,
                    "isTechnical": true,
                    "interests": ["Technology", "Design"],
                    "lastSeenAt": "2024-10-30T12:00:00Z"
                },
                {
                    "slug": "sparse-record"
                }
            ],
            "candidatesCount": 60
        }"#;
        let response: SearchCandidatesResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.candidates_count, 60);
        assert_eq!(response.candidates.len(), 2);
        assert_eq!(response.candidates[0].display_name(), "Jane Doe");
        assert_eq!(response.candidates[0].is_technical, Some(true));
        // partial records never fail to parse; display values default
        assert_eq!(response.candidates[1].display_name(), "?");
        assert_eq!(response.candidates[1].age_label(), "N/A");
    }

    #[test]
    fn null_fields_are_tolerated() {
        let payload = r#"{
            "candidates": [
                {"slug": "x", "name": null, "age": null, "interests": null}
            ],
            "candidatesCount": 1
        }"#;
        let response: SearchCandidatesResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.candidates[0].name, None);
        assert!(response.candidates[0].interests.is_empty());
    }
}
