#![allow(missing_docs)]

pub(crate) mod html;
pub(crate) mod http;

use axum_test::TestServer;
use tempfile::TempDir;

use crate::{AppState, build_router, db};

pub(crate) use html::{assert_valid_html, parse_html_document};
pub(crate) use http::assert_status_ok;

/// Create a test server backed by a fresh, initialized database file.
///
/// The database lives in the returned [TempDir], keep it alive for the duration of the test.
pub(crate) fn get_test_server() -> (TestServer, AppState, TempDir) {
    let dir = tempfile::tempdir().expect("Could not create temporary directory.");
    let state = AppState::new(dir.path().join("test.db"));

    let connection = state.open_connection().expect("Could not open database.");
    db::initialize(&connection).expect("Could not initialize database.");

    let server = TestServer::new(build_router(state.clone()));

    (server, state, dir)
}
