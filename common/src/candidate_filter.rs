//! Filter form state and its normalization into the query filter.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};


/// Raw state of the filter form, exactly as the inputs hold it: free text,
/// numeric strings, `"true"`/`"false"` select values, checkbox sets.
/// `Default` is the cleared form. Unknown fields in serialized input are
/// ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RawFilterInput {
    pub search: String,
    pub search_name: String,
    pub search_company: String,
    pub age_min: String,
    pub age_max: String,
    pub is_woman: String,
    pub is_technical: String,
    pub location: String,
    pub country: String,
    pub region: String,
    pub timing: String,
    pub interests: BTreeSet<String>,
    pub responsibilities: BTreeSet<String>,
    pub has_idea: String,
    pub has_cf: String,
    pub has_company: String,
    pub has_company_url: String,
    pub cf_is_technical: String,
    pub cf_location: String,
    pub cf_age_min: String,
    pub cf_age_max: String,
}

impl RawFilterInput {
    /// The canonical "clear all" form state.
    pub fn cleared() -> Self {
        Self::default()
    }
}


/// Three-valued "has business idea" filter. The upstream semantics of
/// `maybe` are opaque to us, so the value is passed through unresolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdeaFilter {
    Yes,
    No,
    Maybe,
}

impl IdeaFilter {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            "maybe" => Some(Self::Maybe),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Maybe => "maybe",
        }
    }
}


/// Normalized filter sent to the query interface. Serializes to the upstream
/// `FilterInput` shape, so field names are camelCase on the wire and absent
/// fields mean "no constraint". Never contains an empty string or empty set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_max: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_woman: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_technical: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<BTreeSet<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsibilities: Option<BTreeSet<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_idea: Option<IdeaFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_cf: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_company: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_company_url: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cf_is_technical: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cf_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cf_age_min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cf_age_max: Option<u32>,
}

impl CandidateFilter {
    /// True when no constraint is active at all.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Inverse of [`normalize`]: rebuilds the raw form state that produces
    /// this filter. Used to refill the filter panel from a route parameter.
    pub fn to_raw_input(&self) -> RawFilterInput {
        RawFilterInput {
            search: self.search.clone().unwrap_or_default(),
            search_name: self.search_name.clone().unwrap_or_default(),
            search_company: self.search_company.clone().unwrap_or_default(),
            age_min: age_to_raw(self.age_min),
            age_max: age_to_raw(self.age_max),
            is_woman: flag_to_raw(self.is_woman),
            is_technical: flag_to_raw(self.is_technical),
            location: self.location.clone().unwrap_or_default(),
            country: self.country.clone().unwrap_or_default(),
            region: self.region.clone().unwrap_or_default(),
            timing: self.timing.clone().unwrap_or_default(),
            interests: self.interests.clone().unwrap_or_default(),
            responsibilities: self.responsibilities.clone().unwrap_or_default(),
            has_idea: self.has_idea.map(|v| v.as_str().to_string()).unwrap_or_default(),
            has_cf: flag_to_raw(self.has_cf),
            has_company: flag_to_raw(self.has_company),
            has_company_url: flag_to_raw(self.has_company_url),
            cf_is_technical: flag_to_raw(self.cf_is_technical),
            cf_location: self.cf_location.clone().unwrap_or_default(),
            cf_age_min: age_to_raw(self.cf_age_min),
            cf_age_max: age_to_raw(self.cf_age_max),
        }
    }
}


/// Converts raw form state into the normalized filter. Pure: the same input
/// always yields the same output, and a cleared form yields the empty filter.
pub fn normalize(raw: &RawFilterInput) -> CandidateFilter {
    CandidateFilter {
        search: normalize_text(&raw.search),
        search_name: normalize_text(&raw.search_name),
        search_company: normalize_text(&raw.search_company),
        age_min: normalize_age(&raw.age_min),
        age_max: normalize_age(&raw.age_max),
        is_woman: normalize_flag(&raw.is_woman),
        is_technical: normalize_flag(&raw.is_technical),
        location: normalize_text(&raw.location),
        country: normalize_text(&raw.country),
        region: normalize_text(&raw.region),
        timing: normalize_text(&raw.timing),
        interests: normalize_terms(&raw.interests),
        responsibilities: normalize_terms(&raw.responsibilities),
        has_idea: IdeaFilter::parse(&raw.has_idea),
        has_cf: normalize_flag(&raw.has_cf),
        has_company: normalize_flag(&raw.has_company),
        has_company_url: normalize_flag(&raw.has_company_url),
        cf_is_technical: normalize_flag(&raw.cf_is_technical),
        cf_location: normalize_text(&raw.cf_location),
        cf_age_min: normalize_age(&raw.cf_age_min),
        cf_age_max: normalize_age(&raw.cf_age_max),
    }
}

/// Boolean-class fields accept exactly `"true"` or `"false"`; everything
/// else means "no constraint".
fn normalize_flag(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Integer-class fields must be base-10 numerals. Fractional input is
/// truncated towards zero; anything non-numeric or negative is dropped
/// rather than coerced to 0.
fn normalize_age(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(n) = raw.parse::<i64>() {
        return u32::try_from(n).ok();
    }
    let f = raw.parse::<f64>().ok()?;
    if !f.is_finite() {
        return None;
    }
    u32::try_from(f.trunc() as i64).ok()
}

/// String-class fields are trimmed; blank means "no constraint".
fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Set-class fields are copied verbatim; an empty set means "no constraint".
fn normalize_terms(raw: &BTreeSet<String>) -> Option<BTreeSet<String>> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.clone())
    }
}

fn flag_to_raw(value: Option<bool>) -> String {
    match value {
        Some(true) => "true".to_string(),
        Some(false) => "false".to_string(),
        None => String::new(),
    }
}

fn age_to_raw(value: Option<u32>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleared_form_normalizes_to_empty_filter() {
        let filter = normalize(&RawFilterInput::cleared());
        assert!(filter.is_empty());
        assert_eq!(filter, CandidateFilter::default());
    }

    #[test]
    fn invalid_age_and_empty_set_are_omitted() {
        let raw = RawFilterInput {
            age_min: "abc".to_string(),
            is_woman: "true".to_string(),
            interests: BTreeSet::new(),
            ..RawFilterInput::cleared()
        };
        let filter = normalize(&raw);
        let expected = CandidateFilter {
            is_woman: Some(true),
            ..CandidateFilter::default()
        };
        assert_eq!(filter, expected);
    }

    #[test]
    fn flags_require_exact_literals() {
        assert_eq!(normalize_flag("true"), Some(true));
        assert_eq!(normalize_flag("false"), Some(false));
        assert_eq!(normalize_flag("True"), None);
        assert_eq!(normalize_flag("1"), None);
        assert_eq!(normalize_flag(""), None);
    }

    #[test]
    fn ages_truncate_and_never_coerce_to_zero() {
        assert_eq!(normalize_age("25"), Some(25));
        assert_eq!(normalize_age(" 30 "), Some(30));
        assert_eq!(normalize_age("25.7"), Some(25));
        assert_eq!(normalize_age("abc"), None);
        assert_eq!(normalize_age(""), None);
        assert_eq!(normalize_age("-5"), None);
        assert_eq!(normalize_age("NaN"), None);
    }

    #[test]
    fn text_fields_are_trimmed_and_blank_is_absent() {
        let raw = RawFilterInput {
            location: "  Berlin  ".to_string(),
            country: "   ".to_string(),
            ..RawFilterInput::cleared()
        };
        let filter = normalize(&raw);
        assert_eq!(filter.location.as_deref(), Some("Berlin"));
        assert_eq!(filter.country, None);
    }

    #[test]
    fn idea_filter_is_three_valued_and_opaque() {
        let raw = RawFilterInput {
            has_idea: "maybe".to_string(),
            ..RawFilterInput::cleared()
        };
        assert_eq!(normalize(&raw).has_idea, Some(IdeaFilter::Maybe));
        assert_eq!(IdeaFilter::parse("Yes"), None);
        assert_eq!(IdeaFilter::parse(""), None);
    }

    #[test]
    fn normalize_is_idempotent_through_the_raw_inverse() {
        let raw = RawFilterInput {
            search: "  fintech ".to_string(),
            search_name: "Ada".to_string(),
            age_min: "21".to_string(),
            age_max: "nope".to_string(),
            is_technical: "false".to_string(),
            timing: "Immediately".to_string(),
            interests: ["Technology".to_string(), "Finance".to_string()].into(),
            has_idea: "yes".to_string(),
            has_company: "true".to_string(),
            cf_age_max: "44.2".to_string(),
            ..RawFilterInput::cleared()
        };
        let once = normalize(&raw);
        let twice = normalize(&once.to_raw_input());
        assert_eq!(once, twice);
    }

    #[test]
    fn normalized_filter_never_holds_empty_values() {
        let raw = RawFilterInput {
            search: "   ".to_string(),
            search_company: "\t".to_string(),
            age_min: "x".to_string(),
            is_woman: "yes".to_string(),
            responsibilities: BTreeSet::new(),
            ..RawFilterInput::cleared()
        };
        let filter = normalize(&raw);
        assert!(filter.is_empty());
        if let Some(set) = &filter.interests {
            assert!(!set.is_empty());
        }
    }
}
