// src/lib.rs

//! Wayback Machine snapshot search library.

pub mod error;
#[cfg(feature = "gui")]
pub mod gui;
pub mod models;
pub mod services;
pub mod utils;
pub mod view;

#[cfg(test)]
mod test_utils;
