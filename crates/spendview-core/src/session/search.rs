//! Side search panel state.

use crate::models::SearchHit;

/// State of the web-search panel. Independent lifecycle from the result set
/// and the chat threads; hiding the panel loses nothing.
#[derive(Debug, Clone, Default)]
pub struct SearchPanel {
    pub query: String,
    pub loading: bool,
    pub results: Vec<SearchHit>,
    pub visible: bool,
    /// Set when the last search failed, so a failure reads differently from
    /// a genuine empty result.
    pub failed: bool,
    /// Whether any search has completed since the panel was created. Gates
    /// the "No results." affordance so it never shows before a search ran.
    pub ran: bool,
}

impl SearchPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Prepare for a new request: stale results must never be shown next to
    /// a new query, so they are cleared before the request is issued.
    pub fn begin_search(&mut self) {
        self.results.clear();
        self.failed = false;
        self.loading = true;
    }

    pub fn finish(&mut self, results: Vec<SearchHit>) {
        self.results = results;
        self.loading = false;
        self.ran = true;
    }

    pub fn fail(&mut self) {
        self.results.clear();
        self.failed = true;
        self.loading = false;
        self.ran = true;
    }

    /// True when the panel should show the "No results." affordance.
    pub fn is_empty_result(&self) -> bool {
        self.ran && !self.loading && !self.failed && self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(title: &str) -> SearchHit {
        SearchHit {
            title: title.into(),
            body: String::new(),
            href: String::new(),
        }
    }

    #[test]
    fn begin_search_clears_prior_results() {
        let mut panel = SearchPanel::new();
        panel.finish(vec![hit("old")]);
        assert_eq!(panel.results.len(), 1);

        panel.begin_search();
        assert!(panel.results.is_empty());
        assert!(panel.loading);
        assert!(!panel.failed);
    }

    #[test]
    fn failure_is_distinct_from_empty() {
        let mut panel = SearchPanel::new();
        panel.begin_search();
        panel.fail();
        assert!(panel.failed);
        assert!(!panel.is_empty_result());

        panel.begin_search();
        panel.finish(Vec::new());
        assert!(!panel.failed);
        assert!(panel.is_empty_result());
    }

    #[test]
    fn toggle_preserves_query_and_results() {
        let mut panel = SearchPanel::new();
        panel.query = "Acme".into();
        panel.finish(vec![hit("Acme Corp")]);

        panel.toggle();
        assert!(panel.visible);
        panel.toggle();
        assert!(!panel.visible);
        assert_eq!(panel.query, "Acme");
        assert_eq!(panel.results.len(), 1);
    }
}
