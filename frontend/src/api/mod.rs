pub mod candidate_api;
