//! GraphQL document and variable building for the candidate query.

use common::candidate_query::CandidateQuery;

/// The one upstream operation: a page of candidates plus the total count of
/// matches for the same filter.
pub const GET_CANDIDATES_QUERY: &str = "
query GetCandidates($filters: FilterInput, $limit: Int, $offset: Int) {
  candidates(filters: $filters, limit: $limit, offset: $offset) {
    slug
    name
    firstName
    age
    isWoman
    avatarUrl
    linkedin
    education
    employment
    isTechnical
    location
    country
    region
    timing
    emailSettings
    videoLink
    calendlyLink
    intro
    impressiveThing
    interests
    responsibilities
    companyName
    companyUrl
    hasIdea
    ideas
    hasCf
    currentCfLinkedin
    currentCfTechnical
    reqFreeText
    equity
    cfHasIdea
    cfHasIdeaImportance
    cfIsTechnical
    cfIsTechnicalImportance
    cfResponsibilities
    cfResponsibilitiesImportance
    cfLocation
    cfLocationImportance
    cfLocationKmRange
    cfAgeMin
    cfAgeMax
    cfAgeImportance
    cfTimingImportance
    cfInterestsImportance
    lastSeenAt
    savedAt
  }
  candidatesCount(filters: $filters)
}
";

/// Variables for [`GET_CANDIDATES_QUERY`]. The normalized filter serializes
/// straight into the upstream `FilterInput` shape: camelCase keys, inactive
/// constraints absent.
pub fn build_query_variables(query: &CandidateQuery) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::json!({
        "filters": serde_json::to_value(&query.filters)?,
        "limit": query.limit,
        "offset": query.offset,
    }))
}


#[cfg(test)]
mod tests {
    use super::*;
    use common::candidate_filter::{CandidateFilter, IdeaFilter};

    #[test]
    fn empty_filter_sends_an_empty_filters_object() {
        let query = CandidateQuery {
            filters: CandidateFilter::default(),
            limit: 25,
            offset: 50,
        };
        let variables = build_query_variables(&query).unwrap();
        assert_eq!(variables["filters"], serde_json::json!({}));
        assert_eq!(variables["limit"], 25);
        assert_eq!(variables["offset"], 50);
    }

    #[test]
    fn active_constraints_use_upstream_field_names() {
        let filters = CandidateFilter {
            search_name: Some("Ada".to_string()),
            age_min: Some(21),
            is_woman: Some(true),
            has_idea: Some(IdeaFilter::Maybe),
            interests: Some(["Technology".to_string()].into()),
            ..CandidateFilter::default()
        };
        let query = CandidateQuery { filters, limit: 10, offset: 0 };
        let variables = build_query_variables(&query).unwrap();
        assert_eq!(
            variables["filters"],
            serde_json::json!({
                "searchName": "Ada",
                "ageMin": 21,
                "isWoman": true,
                "hasIdea": "maybe",
                "interests": ["Technology"],
            })
        );
    }
}
