//! Typed route parameter encoding.

use std::{fmt::Display, str::FromStr};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use serde::{Deserialize, Serialize};


// Any serde type can ride in a route segment as long as it implements
// Display, FromStr and Default.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RouteParam<T>(pub T);

impl<T> From<T> for RouteParam<T> {
    fn from(value: T) -> Self {
        RouteParam(value)
    }
}

// Display the value in a way FromStr can parse back
impl<T: Serialize> Display for RouteParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut serialized = Vec::new();
        if ciborium::into_writer(self, &mut serialized).is_ok() {
            write!(f, "{}", URL_SAFE.encode(serialized))?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum RouteParamParseError {
    DecodeError(base64::DecodeError),
    CiboriumError(ciborium::de::Error<std::io::Error>),
}

impl std::fmt::Display for RouteParamParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DecodeError(err) => write!(f, "Failed to decode base64: {}", err),
            Self::CiboriumError(err) => write!(f, "Failed to deserialize: {}", err),
        }
    }
}

impl<T: for<'de> Deserialize<'de>> FromStr for RouteParam<T> {
    type Err = RouteParamParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = URL_SAFE
            .decode(s.as_bytes())
            .map_err(RouteParamParseError::DecodeError)?;
        let parsed = ciborium::from_reader(std::io::Cursor::new(decoded))
            .map_err(RouteParamParseError::CiboriumError)?;
        Ok(parsed)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use common::candidate_filter::CandidateFilter;

    #[test]
    fn filters_round_trip_through_the_url_segment() {
        let filter = CandidateFilter {
            location: Some("Berlin".to_string()),
            age_max: Some(40),
            ..CandidateFilter::default()
        };
        let param = RouteParam::from(filter.clone());
        let encoded = param.to_string();
        let parsed: RouteParam<CandidateFilter> = encoded.parse().unwrap();
        assert_eq!(parsed.0, filter);
    }

    #[test]
    fn garbage_segments_fail_to_parse() {
        let parsed = "!!not-base64!!".parse::<RouteParam<CandidateFilter>>();
        assert!(parsed.is_err());
    }
}
