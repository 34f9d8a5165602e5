//! Display defaulting for partial candidate records.
//!
//! Upstream records miss fields freely; every presentation value defined
//! here falls back to a fixed placeholder instead of failing.

use crate::candidate_result::Candidate;

pub const UNKNOWN_DATE: &str = "Unknown";
pub const MISSING_VALUE: &str = "N/A";


impl Candidate {
    /// Name to show in lists and titles: full name, then first name, then a
    /// question mark.
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.first_name.clone().filter(|s| !s.trim().is_empty()))
            .unwrap_or_else(|| "?".to_string())
    }

    /// Single uppercase character for the avatar placeholder.
    pub fn avatar_initial(&self) -> String {
        self.display_name()
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    }

    /// Age cell content, `"N/A"` when not specified.
    pub fn age_label(&self) -> String {
        self.age
            .map(|age| age.to_string())
            .unwrap_or_else(|| MISSING_VALUE.to_string())
    }

    /// Age sentence used in the detail view header.
    pub fn age_sentence(&self) -> String {
        self.age
            .map(|age| format!("{age} years old"))
            .unwrap_or_else(|| "Age not specified".to_string())
    }
}

/// Date label from an upstream timestamp. Timestamps come as RFC 3339-ish
/// strings; only the date portion is shown. Missing or blank means
/// `"Unknown"`.
pub fn format_date(timestamp: Option<&str>) -> String {
    match timestamp.map(str::trim) {
        None | Some("") => UNKNOWN_DATE.to_string(),
        Some(value) => value.split('T').next().unwrap_or(value).to_string(),
    }
}

/// Splits free text (education, employment) into trimmed, non-empty lines
/// for list rendering.
pub fn text_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_falls_back_to_first_name_then_placeholder() {
        let mut candidate = Candidate::default();
        assert_eq!(candidate.display_name(), "?");
        assert_eq!(candidate.avatar_initial(), "?");
        candidate.first_name = Some("ada".to_string());
        assert_eq!(candidate.display_name(), "ada");
        assert_eq!(candidate.avatar_initial(), "A");
        candidate.name = Some("Ada Lovelace".to_string());
        assert_eq!(candidate.display_name(), "Ada Lovelace");
    }

    #[test]
    fn age_defaults_are_documented_placeholders() {
        let mut candidate = Candidate::default();
        assert_eq!(candidate.age_label(), "N/A");
        assert_eq!(candidate.age_sentence(), "Age not specified");
        candidate.age = Some(29);
        assert_eq!(candidate.age_label(), "29");
        assert_eq!(candidate.age_sentence(), "29 years old");
    }

    #[test]
    fn dates_show_only_the_date_portion() {
        assert_eq!(format_date(Some("2024-11-02T09:15:00Z")), "2024-11-02");
        assert_eq!(format_date(Some("2024-11-02")), "2024-11-02");
        assert_eq!(format_date(None), "Unknown");
        assert_eq!(format_date(Some("  ")), "Unknown");
    }

    #[test]
    fn text_lines_drop_blank_entries() {
        assert_eq!(
            text_lines("MIT \n\n  Stanford\n "),
            vec!["MIT".to_string(), "Stanford".to_string()]
        );
        assert!(text_lines("").is_empty());
    }
}
