// src/view/state.rs

//! Search form state and the operations that mutate it.

use crate::error::Result;
use crate::models::{EndpointConfig, ResultRecord, YearField, YearRange};
use crate::services::{ArchiveClient, SearchOutcome, SearchRequest, fetch_snapshots};

use super::render::{Action, Page, render};

/// All state owned by the search form.
///
/// A search runs in three steps so the caller never has to hold the view
/// across the network wait: `begin_search` flips the loading flag and hands
/// back the URLs, the caller runs `fetch_snapshots`, and `finish_search`
/// applies the outcome. `submit_search` does all three in one call.
#[derive(Debug, Clone, Default)]
pub struct SearchView {
    endpoints: EndpointConfig,
    search_term: String,
    year_range: YearRange,
    loading: bool,
    results: Vec<ResultRecord>,
}

impl SearchView {
    /// Fresh form with an empty term, the open range and no results.
    pub fn new(endpoints: EndpointConfig) -> Self {
        Self {
            endpoints,
            ..Self::default()
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn year_range(&self) -> &YearRange {
        &self.year_range
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn results(&self) -> &[ResultRecord] {
        &self.results
    }

    pub fn update_search_term(&mut self, text: impl Into<String>) {
        self.search_term = text.into();
    }

    /// Replace one end of the year range.
    ///
    /// Values the selector for `field` does not offer are rejected and leave
    /// the range as it was.
    pub fn update_year_range(&mut self, field: YearField, value: &str) -> Result<()> {
        self.year_range.set(field, value)
    }

    /// Enter the searching state and build the request for the current inputs.
    ///
    /// Returns `None` without touching state if a search is already running.
    pub fn begin_search(&mut self) -> Option<SearchRequest> {
        if self.loading {
            log::debug!("Search already in flight, ignoring submit");
            return None;
        }

        self.loading = true;
        let request = SearchRequest::new(&self.endpoints, &self.search_term, &self.year_range);
        log::info!(
            "Searching '{}' from {} to {}",
            self.search_term,
            self.year_range.start,
            self.year_range.end
        );
        Some(request)
    }

    /// Apply the outcome of a search and return to idle.
    ///
    /// On failure the error is logged and the previous results stay in place.
    pub fn finish_search(&mut self, outcome: Result<SearchOutcome>) {
        match outcome {
            Ok(outcome) => {
                self.results = outcome.into_records();
                log::info!("Search complete: {} results", self.results.len());
            }
            Err(e) => log::error!("Search failed: {}", e),
        }
        self.loading = false;
    }

    /// Run a whole search against `client`.
    pub async fn submit_search<C>(&mut self, client: &C)
    where
        C: ArchiveClient + ?Sized,
    {
        if let Some(request) = self.begin_search() {
            let outcome = fetch_snapshots(client, &request).await;
            self.finish_search(outcome);
        }
    }

    /// Route a form event to its operation.
    ///
    /// `Action::Submit` yields the request the caller should execute.
    pub fn dispatch(&mut self, action: Action) -> Result<Option<SearchRequest>> {
        match action {
            Action::EditSearchTerm(text) => self.update_search_term(text),
            Action::SelectYear { field, value } => self.update_year_range(field, &value)?,
            Action::Submit => return Ok(self.begin_search()),
        }
        Ok(None)
    }

    pub fn render(&self) -> Page {
        render(self)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;

    use super::*;
    use crate::models::{EndYear, StartYear};
    use crate::test_utils::{Reply, StubClient};

    fn answering(view: &SearchView, availability: Reply, cdx: Reply) -> StubClient {
        let request = SearchRequest::new(&view.endpoints, &view.search_term, &view.year_range);
        StubClient::new()
            .reply(&request.availability_url, availability)
            .reply(&request.cdx_url, cdx)
    }

    #[test]
    fn test_initial_state() {
        let view = SearchView::default();
        assert_eq!(view.search_term(), "");
        assert_eq!(view.year_range(), &YearRange::default());
        assert!(!view.is_loading());
        assert!(view.results().is_empty());
    }

    #[test]
    fn test_year_fields_are_independent() {
        let mut view = SearchView::default();
        view.update_year_range(YearField::Start, "2010").unwrap();
        view.update_year_range(YearField::End, "2015").unwrap();
        assert_eq!(view.year_range().start, StartYear::Year(2010));
        assert_eq!(view.year_range().end, EndYear::Year(2015));

        view.update_year_range(YearField::Start, "beginning").unwrap();
        assert_eq!(view.year_range().start, StartYear::Beginning);
        assert_eq!(view.year_range().end, EndYear::Year(2015));
    }

    #[test]
    fn test_begin_sets_loading_and_snapshots_inputs() {
        let mut view = SearchView::default();
        view.update_search_term("example.com");

        let request = view.begin_search().unwrap();
        assert!(view.is_loading());

        view.update_search_term("other.org");
        assert!(request.availability_url.contains("url=example.com&"));
    }

    #[test]
    fn test_submit_while_loading_is_ignored() {
        let mut view = SearchView::default();
        assert!(view.begin_search().is_some());
        assert!(view.begin_search().is_none());
        assert!(view.is_loading());
    }

    #[test]
    fn test_second_submit_action_while_loading_is_ignored() {
        let mut view = SearchView::default();
        view.update_search_term("example.com");

        assert!(view.dispatch(Action::Submit).unwrap().is_some());
        assert!(!view.render().form.submit.enabled);

        view.update_search_term("changed.org");
        assert!(view.dispatch(Action::Submit).unwrap().is_none());
        assert!(view.is_loading());

        view.finish_search(Err(crate::error::AppError::validation("boom")));
        let request = view.dispatch(Action::Submit).unwrap().unwrap();
        assert!(request.availability_url.contains("url=changed.org&"));
    }

    #[test]
    fn test_finish_failure_returns_to_idle() {
        let mut view = SearchView::default();
        view.begin_search().unwrap();
        view.finish_search(Err(crate::error::AppError::validation("boom")));
        assert!(!view.is_loading());
        assert!(view.results().is_empty());
    }

    #[tokio::test]
    async fn test_submit_stores_ordered_pair() {
        let mut view = SearchView::default();
        view.update_search_term("example.com");
        let client = answering(
            &view,
            Reply::Delayed(json!({"title": "T1"}), Duration::from_millis(30)),
            Reply::Json(json!([["a"], ["b"]])),
        );

        view.submit_search(&client).await;

        assert!(!view.is_loading());
        let raw: Vec<_> = view.results().iter().map(|r| r.raw().clone()).collect();
        assert_eq!(raw, vec![json!({"title": "T1"}), json!([["a"], ["b"]])]);
    }

    #[tokio::test]
    async fn test_new_results_replace_old() {
        let mut view = SearchView::default();
        view.update_search_term("one.com");
        let client = answering(&view, Reply::Json(json!({"n": 1})), Reply::Json(json!([])));
        view.submit_search(&client).await;

        view.update_search_term("two.com");
        let client = answering(&view, Reply::Json(json!({"n": 2})), Reply::Json(json!([[]])));
        view.submit_search(&client).await;

        assert_eq!(view.results().len(), 2);
        assert_eq!(view.results()[0].raw(), &json!({"n": 2}));
        assert_eq!(view.results()[1].raw(), &json!([[]]));
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_results() {
        let mut view = SearchView::default();
        view.update_search_term("example.com");
        let client = answering(&view, Reply::Json(json!({"ok": 1})), Reply::Json(json!([])));
        view.submit_search(&client).await;
        let before = view.results().to_vec();

        let client = answering(&view, Reply::Json(json!({"ok": 2})), Reply::Garbage);
        view.submit_search(&client).await;
        assert!(!view.is_loading());
        assert_eq!(view.results(), before.as_slice());

        let client = answering(&view, Reply::Unreachable, Reply::Json(json!([])));
        view.submit_search(&client).await;
        assert!(!view.is_loading());
        assert_eq!(view.results(), before.as_slice());
    }

    #[test]
    fn test_dispatch_routes_actions() {
        let mut view = SearchView::default();

        let none = view
            .dispatch(Action::EditSearchTerm("example.com".into()))
            .unwrap();
        assert!(none.is_none());
        assert_eq!(view.search_term(), "example.com");

        view.dispatch(Action::SelectYear {
            field: YearField::End,
            value: "2005".into(),
        })
        .unwrap();
        assert_eq!(view.year_range().end, EndYear::Year(2005));

        assert!(
            view.dispatch(Action::SelectYear {
                field: YearField::Start,
                value: "current".into(),
            })
            .is_err()
        );

        let request = view.dispatch(Action::Submit).unwrap().unwrap();
        assert!(request.cdx_url.contains("from=beginning&to=2005"));
        assert!(view.is_loading());
    }
}
