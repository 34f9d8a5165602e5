//! Shared constants for the candidate search flow.

/// Page sizes the result list can be switched between.
pub const PAGE_SIZE_OPTIONS: [u64; 4] = [10, 25, 50, 100];

/// Page size used before the user picks one.
pub const DEFAULT_PAGE_SIZE: u64 = 25;

/// Number of page indicators shown on each side of the current page.
pub const PAGE_WINDOW_RADIUS: u64 = 2;

pub const LINKEDIN_PROFILE_URL_PREFIX: &str = "https://linkedin.com/in/";

pub const COFOUNDER_MATCH_PROFILE_URL_PREFIX: &str =
    "https://www.startupschool.org/cofounder-matching/candidate/";
