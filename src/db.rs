//! Database setup for the ledger.

use std::path::Path;

use rusqlite::{Connection, Transaction as SqlTransaction};

use crate::{Error, transaction::create_transaction_table};

/// Open a connection to the SQLite database at `db_path`.
///
/// The database file is created if it does not exist.
///
/// # Errors
/// Returns an [Error::SqlError] if the database cannot be opened.
pub fn open(db_path: &Path) -> Result<Connection, Error> {
    Connection::open(db_path).map_err(|error| error.into())
}

/// Create the tables for the domain models if they do not already exist.
///
/// Safe to call on every startup, existing tables and rows are left untouched.
///
/// # Errors
/// Returns an error if a table cannot be created or if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction =
        SqlTransaction::new_unchecked(connection, rusqlite::TransactionBehavior::Exclusive)?;

    create_transaction_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use super::initialize;

    #[test]
    fn initialize_is_idempotent() {
        let connection = Connection::open_in_memory().unwrap();

        initialize(&connection).expect("first initialization failed");
        initialize(&connection).expect("second initialization failed");
    }

    #[test]
    fn initialize_keeps_existing_rows() {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        connection
            .execute(
                "INSERT INTO transactions (type, amount, category, date, note)
                 VALUES ('expense', 1.5, 'Food', '2024-01-01', '')",
                (),
            )
            .unwrap();

        initialize(&connection).unwrap();

        let count: u32 = connection
            .query_row("SELECT COUNT(id) FROM transactions", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
