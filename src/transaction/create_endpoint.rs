//! Implements the route handler for creating a transaction from a JSON body.

use std::collections::BTreeMap;

use axum::{body::Bytes, extract::State, http::StatusCode, response::Response};
use serde::de::IgnoredAny;
use serde_json::{Map, Value};

use crate::{
    AppState, Error,
    json_response::status_response,
    transaction::{Transaction, TransactionBuilder, create_transaction},
};

const FAILURE_MESSAGE: &str = "Failed to add transaction";

/// The keys that must be present in the JSON body of a create request.
const REQUIRED_FIELDS: [&str; 4] = ["type", "amount", "category", "date"];

/// A route handler for creating a new transaction.
///
/// The body is parsed as JSON regardless of the content type header.
/// Responds with 201 Created and `{"status": "success"}` on success.
pub async fn create_transaction_endpoint(State(state): State<AppState>, body: Bytes) -> Response {
    let builder = match parse_transaction(&body) {
        Ok(builder) => builder,
        Err(error) => return error.into_json_response(FAILURE_MESSAGE),
    };

    let result = state
        .open_connection()
        .and_then(|connection| create_transaction(builder, &connection));

    match result {
        Ok(transaction) => {
            tracing::debug!("Created transaction {}", transaction.id);
            status_response(StatusCode::CREATED, "success")
        }
        Err(error) => error.into_json_response(FAILURE_MESSAGE),
    }
}

/// Parse and validate a request body.
///
/// # Errors
/// This function will return a:
/// - [Error::NoJson] if `body` is not a non-empty JSON object,
/// - [Error::MissingFields] if any of [REQUIRED_FIELDS] are absent,
/// - [Error::InvalidAmount] if the amount is not a number or a numeric string,
/// - [Error::NumberOutOfRange] if the body holds a number too large for an `f64`,
/// - or [Error::InvalidField] if a text field holds something other than a string or number.
fn parse_transaction(body: &[u8]) -> Result<TransactionBuilder, Error> {
    let fields = match serde_json::from_slice(body) {
        Ok(Value::Object(fields)) if !fields.is_empty() => fields,
        Ok(_) => return Err(Error::NoJson),
        Err(_) => return Err(classify_unparsed_body(body)),
    };

    check_required_fields(fields.keys())?;

    let amount = coerce_amount(&fields["amount"])?;
    let transaction_type = coerce_text("type", &fields)?;
    let category = coerce_text("category", &fields)?;
    let date = coerce_text("date", &fields)?;
    let note = match fields.get("note") {
        None | Some(Value::Null) => String::new(),
        Some(_) => coerce_text("note", &fields)?,
    };

    Ok(Transaction::build(&transaction_type, amount, &category, &date).note(&note))
}

/// Explain why a body could not be parsed into a [Value].
///
/// `serde_json` rejects numbers that do not fit in an `f64`, but skipping
/// over values does not, so an object with such a number still gets its keys checked.
fn classify_unparsed_body(body: &[u8]) -> Error {
    match serde_json::from_slice::<BTreeMap<String, IgnoredAny>>(body) {
        Ok(fields) if !fields.is_empty() => match check_required_fields(fields.keys()) {
            Ok(()) => Error::NumberOutOfRange,
            Err(error) => error,
        },
        _ => Error::NoJson,
    }
}

fn check_required_fields<'a>(keys: impl Iterator<Item = &'a String>) -> Result<(), Error> {
    let keys: Vec<&str> = keys.map(String::as_str).collect();

    if REQUIRED_FIELDS.iter().all(|field| keys.contains(field)) {
        Ok(())
    } else {
        Err(Error::MissingFields)
    }
}

/// Convert a JSON number or numeric string into a finite float.
fn coerce_amount(value: &Value) -> Result<f64, Error> {
    let amount = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    amount
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| Error::InvalidAmount(value.to_string()))
}

/// Convert a JSON string or number in `fields` into text.
fn coerce_text(field: &'static str, fields: &Map<String, Value>) -> Result<String, Error> {
    match fields.get(field) {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(Value::Number(number)) => Ok(number.to_string()),
        _ => Err(Error::InvalidField(field)),
    }
}
