//! Test utilities for the search application.
//!
//! Only compiled when running tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::services::ArchiveClient;

/// Canned behavior for one URL.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Respond immediately with this body
    Json(Value),
    /// Respond with this body after a delay
    Delayed(Value, Duration),
    /// Body is not JSON
    Garbage,
    /// Connection never established
    Unreachable,
}

/// `ArchiveClient` that answers from a fixed table and records every URL asked.
///
/// URLs with no entry behave as `Reply::Unreachable`.
#[derive(Debug, Default)]
pub struct StubClient {
    replies: HashMap<String, Reply>,
    requested: Mutex<Vec<String>>,
}

impl StubClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, url: &str, reply: Reply) -> Self {
        self.replies.insert(url.to_string(), reply);
        self
    }

    /// URLs requested so far, in call order.
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArchiveClient for StubClient {
    async fn fetch_json(&self, url: &str) -> Result<Value> {
        self.requested.lock().unwrap().push(url.to_string());

        match self.replies.get(url).cloned().unwrap_or(Reply::Unreachable) {
            Reply::Json(value) => Ok(value),
            Reply::Delayed(value, delay) => {
                tokio::time::sleep(delay).await;
                Ok(value)
            }
            Reply::Garbage => Ok(serde_json::from_str("<html>")?),
            Reply::Unreachable => Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                format!("connection refused: {url}"),
            ))),
        }
    }
}
