pub mod graphql_utils;
