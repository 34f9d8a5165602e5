//! External profile link construction.

use crate::search_const::{COFOUNDER_MATCH_PROFILE_URL_PREFIX, LINKEDIN_PROFILE_URL_PREFIX};


/// Expands a stored LinkedIn identifier into a profile URL. Values that
/// already look like full URLs are used verbatim; anything else is treated
/// as a username. Blank input means no link.
pub fn linkedin_url(linkedin: &str) -> Option<String> {
    let linkedin = linkedin.trim();
    if linkedin.is_empty() {
        return None;
    }
    if linkedin.starts_with("http") {
        Some(linkedin.to_string())
    } else {
        Some(format!("{LINKEDIN_PROFILE_URL_PREFIX}{linkedin}"))
    }
}

/// Candidate page on the co-founder matching site, from the record slug.
pub fn cofounder_profile_url(slug: &str) -> String {
    format!("{COFOUNDER_MATCH_PROFILE_URL_PREFIX}{slug}")
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_urls_pass_through_verbatim() {
        assert_eq!(
            linkedin_url("https://www.linkedin.com/in/someone").as_deref(),
            Some("https://www.linkedin.com/in/someone")
        );
        assert_eq!(
            linkedin_url("http://linkedin.com/in/x").as_deref(),
            Some("http://linkedin.com/in/x")
        );
    }

    #[test]
    fn bare_usernames_are_expanded() {
        assert_eq!(
            linkedin_url("someone").as_deref(),
            Some("https://linkedin.com/in/someone")
        );
    }

    #[test]
    fn blank_identifiers_yield_no_link() {
        assert_eq!(linkedin_url(""), None);
        assert_eq!(linkedin_url("   "), None);
    }

    #[test]
    fn profile_url_uses_the_slug_template() {
        assert_eq!(
            cofounder_profile_url("jane-doe"),
            "https://www.startupschool.org/cofounder-matching/candidate/jane-doe"
        );
    }
}
