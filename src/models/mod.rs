// src/models/mod.rs

//! Domain models for the search application.
//!
//! This module contains the data held by the search form and its
//! configuration, organized by their primary purpose.

mod config;
mod record;
mod year;

// Re-export all public types
pub use config::{Config, EndpointConfig, HttpConfig, LoggingConfig};
pub use record::ResultRecord;
pub use year::{
    BEGINNING, CURRENT, EndYear, FIRST_YEAR, StartYear, YEAR_COUNT, YearField, YearRange,
    supported_years,
};
