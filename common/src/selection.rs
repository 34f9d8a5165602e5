//! Detail-view selection state.

use serde::{Deserialize, Serialize};

use crate::candidate_result::Candidate;


/// Which record, if any, is open in the detail view.
///
/// The selection holds its own snapshot of the record, so refreshed result
/// sets never close it implicitly, not even when the record is no longer on
/// the current page. Only an explicit [`SelectionState::close`] dismisses
/// the detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SelectionState {
    detail: Option<Candidate>,
}

impl SelectionState {
    pub fn select(&mut self, candidate: Candidate) {
        self.detail = Some(candidate);
    }

    pub fn close(&mut self) {
        self.detail = None;
    }

    pub fn detail(&self) -> Option<&Candidate> {
        self.detail.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.detail.is_some()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(slug: &str) -> Candidate {
        Candidate {
            slug: slug.to_string(),
            ..Candidate::default()
        }
    }

    #[test]
    fn select_and_close() {
        let mut selection = SelectionState::default();
        assert!(!selection.is_open());
        selection.select(candidate("ada"));
        assert_eq!(selection.detail().map(|c| c.slug.as_str()), Some("ada"));
        selection.close();
        assert!(selection.detail().is_none());
    }

    #[test]
    fn selection_survives_result_set_replacement() {
        // Selection is independent of query state by construction: it keeps
        // its own record snapshot, so a refresh that drops the record from
        // the current page leaves the open detail view untouched.
        let mut selection = SelectionState::default();
        selection.select(candidate("ada"));
        let refreshed_page = vec![candidate("grace"), candidate("edsger")];
        assert!(!refreshed_page.iter().any(|c| c.slug == "ada"));
        assert_eq!(selection.detail().map(|c| c.slug.as_str()), Some("ada"));
    }
}
