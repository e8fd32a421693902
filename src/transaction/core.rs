//! Defines the core data models and database queries for transactions.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{Error, database_id::TransactionId};

// ============================================================================
// MODELS
// ============================================================================

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// What kind of transaction this is, by convention "income" or "expense".
    #[serde(rename = "type")]
    pub transaction_type: String,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// A free-form label for grouping transactions, e.g. "Groceries".
    pub category: String,
    /// When the transaction happened.
    ///
    /// Stored as given. Transactions are sorted by comparing dates as strings,
    /// so clients should use a sortable format such as ISO 8601.
    pub date: String,
    /// An optional comment, empty if none was given.
    pub note: String,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(
        transaction_type: &str,
        amount: f64,
        category: &str,
        date: &str,
    ) -> TransactionBuilder {
        TransactionBuilder {
            transaction_type: transaction_type.to_owned(),
            amount,
            category: category.to_owned(),
            date: date.to_owned(),
            note: String::new(),
        }
    }
}

/// A builder for creating [Transaction] instances.
///
/// The store assigns the ID when the builder is passed to [create_transaction].
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    /// The kind of transaction, e.g. "income" or "expense". Not validated.
    pub transaction_type: String,

    /// The monetary amount of the transaction.
    ///
    /// No sign convention is enforced, callers may record expenses as
    /// positive amounts and use `transaction_type` to tell them apart.
    pub amount: f64,

    /// A free-form category, e.g. "Groceries", "Salary".
    pub category: String,

    /// The date when the transaction occurred, e.g. "2024-03-01".
    pub date: String,

    /// An optional comment. Defaults to the empty string.
    pub note: String,
}

impl TransactionBuilder {
    /// Set the note for the transaction.
    pub fn note(mut self, note: &str) -> Self {
        self.note = note.to_owned();
        self
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new transaction in the database from a builder.
///
/// The values in `builder` are stored as is, e.g. negative amounts and
/// malformed dates are accepted.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn create_transaction(
    builder: TransactionBuilder,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "INSERT INTO transactions (type, amount, category, date, note)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING id, type, amount, category, date, note",
        )?
        .query_row(
            (
                builder.transaction_type,
                builder.amount,
                builder.category,
                builder.date,
                builder.note,
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve every transaction in the database, latest date first.
///
/// Transactions that share a date are returned in the order they were created.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, type, amount, category, date, note FROM transactions
             ORDER BY date DESC, id ASC",
        )?
        .query_map([], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// The number of rows changed by a statement.
pub type RowsAffected = usize;

/// Delete the transaction with `id`.
///
/// Returns the number of deleted rows, zero if no transaction has the ID.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn delete_transaction(
    id: TransactionId,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute("DELETE FROM transactions WHERE id = :id", &[(":id", &id)])
        .map_err(|err| err.into())
}

/// Get the total number of transactions in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM transactions;", [], |row| row.get(0))
        .map_err(|error| error.into())
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    // AUTOINCREMENT stops SQLite from reusing the IDs of deleted rows.
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type TEXT NOT NULL,
                amount REAL NOT NULL,
                category TEXT NOT NULL,
                date TEXT NOT NULL,
                note TEXT
                )",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let transaction_type = row.get(1)?;
    let amount = row.get(2)?;
    let category = row.get(3)?;
    let date = row.get(4)?;
    // Rows written by other tools may have a NULL note.
    let note: Option<String> = row.get(5)?;

    Ok(Transaction {
        id,
        transaction_type,
        amount,
        category,
        date,
        note: note.unwrap_or_default(),
    })
}

// ============================================================================
// TESTS
// ============================================================================
