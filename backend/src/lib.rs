//! Backend library: server-side candidate query implementation.

pub mod api;
pub mod db_utils;
