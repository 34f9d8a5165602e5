//! Candidate records and query responses.

use serde::{Deserialize, Deserializer, Serialize};

/// Upstream list fields arrive as `null` rather than `[]` when unset.
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}


/// A single directory entry. Every field except `slug` is optional; the
/// upstream API returns nulls freely and display code falls back to
/// placeholders instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Candidate {
    pub slug: String,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub age: Option<u32>,
    pub is_woman: Option<bool>,
    pub avatar_url: Option<String>,
    pub linkedin: Option<String>,
    pub education: Option<String>,
    pub employment: Option<String>,
    pub is_technical: Option<bool>,
    pub location: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub timing: Option<String>,
    #[serde(deserialize_with = "null_to_default")]
    pub email_settings: Vec<String>,
    pub video_link: Option<String>,
    pub calendly_link: Option<String>,
    pub intro: Option<String>,
    pub impressive_thing: Option<String>,
    #[serde(deserialize_with = "null_to_default")]
    pub interests: Vec<String>,
    #[serde(deserialize_with = "null_to_default")]
    pub responsibilities: Vec<String>,
    pub company_name: Option<String>,
    pub company_url: Option<String>,
    /// Free-form yes/no/maybe marker, displayed verbatim.
    pub has_idea: Option<String>,
    pub ideas: Option<String>,
    pub has_cf: Option<bool>,
    pub current_cf_linkedin: Option<String>,
    pub current_cf_technical: Option<bool>,
    pub req_free_text: Option<String>,
    pub equity: Option<String>,
    pub cf_has_idea: Option<bool>,
    pub cf_has_idea_importance: Option<String>,
    pub cf_is_technical: Option<bool>,
    pub cf_is_technical_importance: Option<String>,
    #[serde(deserialize_with = "null_to_default")]
    pub cf_responsibilities: Vec<String>,
    pub cf_responsibilities_importance: Option<String>,
    pub cf_location: Option<String>,
    pub cf_location_importance: Option<String>,
    pub cf_location_km_range: Option<u32>,
    pub cf_age_min: Option<u32>,
    pub cf_age_max: Option<u32>,
    pub cf_age_importance: Option<String>,
    pub cf_timing_importance: Option<String>,
    pub cf_interests_importance: Option<String>,
    pub last_seen_at: Option<String>,
    pub saved_at: Option<String>,
}


/// One query response: the page of records in source order plus the total
/// match count. Replaced wholesale on every response, never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CandidateResultSet {
    pub candidates: Vec<Candidate>,
    pub total_count: u64,
}
