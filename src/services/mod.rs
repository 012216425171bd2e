//! Service layer for the search application.
//!
//! This module contains the archive access logic:
//! - Request URL construction (`SearchRequest`)
//! - JSON fetching (`ArchiveClient`, `HttpArchiveClient`)
//! - The joined two-endpoint fetch (`fetch_snapshots`)

mod wayback;

pub use wayback::{
    ArchiveClient, HttpArchiveClient, SearchOutcome, SearchRequest, fetch_snapshots,
};
