pub mod candidate_components;
pub mod error_boundary;
pub mod loading_indicator;
pub mod navbar;
