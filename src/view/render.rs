// src/view/render.rs

//! Pure rendering of the search form into a widget tree.
//!
//! Front ends paint a `Page` and report user input back as `Action`s.

use crate::models::{BEGINNING, CURRENT, YearField, supported_years};

use super::state::SearchView;

pub const PAGE_HEADING: &str = "Wayback Machine Search";
pub const SEARCH_PLACEHOLDER: &str = "Search for words";
pub const RESULTS_HEADING: &str = "Results";
pub const LOADING_TEXT: &str = "Loading...";
pub const SEARCH_LABEL: &str = "Search";
pub const SEARCHING_LABEL: &str = "Searching...";

/// A user interaction with the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Text field edited (sent per keystroke)
    EditSearchTerm(String),
    /// A year selector changed
    SelectYear { field: YearField, value: String },
    /// Submit button clicked or Enter pressed
    Submit,
}

/// The whole window contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub heading: &'static str,
    pub form: Form,
    pub results: ResultsPanel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub search: TextInput,
    pub start: Select,
    pub end: Select,
    pub submit: SubmitButton,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    pub value: String,
    pub placeholder: &'static str,
}

/// Dropdown bound to one end of the year range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    pub field: YearField,
    pub label: &'static str,
    pub selected: String,
    pub options: Vec<SelectOption>,
}

impl Select {
    /// Label of the selected option, falling back to its raw value.
    pub fn selected_label(&self) -> &str {
        self.options
            .iter()
            .find(|o| o.value == self.selected)
            .map(|o| o.label.as_str())
            .unwrap_or(self.selected.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsPanel {
    pub heading: &'static str,
    pub body: PanelBody,
}

/// Loading takes precedence over any stored results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelBody {
    Loading(&'static str),
    Entries(Vec<ResultBlock>),
}

/// One rendered result; missing fields are empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultBlock {
    pub heading: String,
    pub body: String,
}

fn year_options(sentinel: &str, sentinel_label: &str) -> Vec<SelectOption> {
    let mut options = vec![SelectOption {
        value: sentinel.to_string(),
        label: sentinel_label.to_string(),
    }];
    options.extend(supported_years().map(|year| SelectOption {
        value: year.to_string(),
        label: year.to_string(),
    }));
    options
}

/// Build the widget tree for the current state.
pub fn render(view: &SearchView) -> Page {
    let loading = view.is_loading();
    let range = view.year_range();

    let body = if loading {
        PanelBody::Loading(LOADING_TEXT)
    } else {
        PanelBody::Entries(
            view.results()
                .iter()
                .map(|record| ResultBlock {
                    heading: record.title().unwrap_or_default(),
                    body: record.description().unwrap_or_default(),
                })
                .collect(),
        )
    };

    Page {
        heading: PAGE_HEADING,
        form: Form {
            search: TextInput {
                value: view.search_term().to_string(),
                placeholder: SEARCH_PLACEHOLDER,
            },
            start: Select {
                field: YearField::Start,
                label: "Start Year",
                selected: range.value(YearField::Start),
                options: year_options(BEGINNING, "The beginning"),
            },
            end: Select {
                field: YearField::End,
                label: "End Year",
                selected: range.value(YearField::End),
                options: year_options(CURRENT, "Current"),
            },
            submit: SubmitButton {
                label: if loading { SEARCHING_LABEL } else { SEARCH_LABEL },
                enabled: !loading,
            },
        },
        results: ResultsPanel {
            heading: RESULTS_HEADING,
            body,
        },
    }
}
