//! Implements a struct that holds the state of the REST server.

use std::path::PathBuf;

use rusqlite::Connection;

use crate::{Error, db};

/// The state of the REST server.
///
/// Only holds configuration. Request handlers open their own database
/// connection with [AppState::open_connection] and drop it before responding.
#[derive(Debug, Clone)]
pub struct AppState {
    /// File path to the SQLite database.
    db_path: PathBuf,
}

impl AppState {
    /// Create a new [AppState] for the SQLite database at `db_path`.
    ///
    /// The database is not touched until a request is handled, call
    /// [crate::initialize_db] once at startup to create the tables.
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Open a new connection to the database.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the database cannot be opened.
    pub fn open_connection(&self) -> Result<Connection, Error> {
        db::open(&self.db_path)
    }
}
