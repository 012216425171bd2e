//! The search form: state container and its rendering.

mod render;
mod state;

pub use render::{
    Action, Form, LOADING_TEXT, PAGE_HEADING, Page, PanelBody, RESULTS_HEADING, ResultBlock,
    ResultsPanel, SEARCH_LABEL, SEARCH_PLACEHOLDER, SEARCHING_LABEL, Select, SelectOption,
    SubmitButton, TextInput, render,
};
pub use state::SearchView;
