//! Database operations and SQLite management for plans and test cases.
//!
//! This module provides the low-level storage layer: connection setup,
//! schema management and the query interfaces for plans, test cases and
//! plan progress. Every write runs in an immediate transaction so that
//! concurrent writers from other connections wait on the busy timeout
//! instead of failing mid-transaction.

use std::{path::Path, time::Duration};

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod plan_queries;
pub mod progress_queries;
pub mod test_case_queries;
mod utils;

/// How long a connection waits for a competing writer before giving up.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_busy_timeout(path, DEFAULT_BUSY_TIMEOUT)
    }

    /// Like [`Database::new`], waiting at most `timeout` for locks held by
    /// other connections.
    pub fn with_busy_timeout<P: AsRef<Path>>(path: P, timeout: Duration) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        connection
            .busy_timeout(timeout)
            .db_context("Failed to set busy timeout")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
