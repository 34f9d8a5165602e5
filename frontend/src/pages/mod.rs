pub mod candidate_search_page;
pub mod home_page;
