//! API handler modules.

pub mod candidates;
