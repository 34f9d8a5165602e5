//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod candidate_filter;
pub mod candidate_query;
pub mod candidate_result;
pub mod candidate_display;
pub mod coordinator;
pub mod pagination;
pub mod projector;
pub mod profile_links;
pub mod search_const;
pub mod selection;
