//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/transaction/{transaction_id}', use [format_endpoint].

/// The root route which shows that the server is running.
pub const ROOT: &str = "/";
/// The route to list all transactions.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route to create a transaction.
pub const POST_TRANSACTION: &str = "/api/transaction";
/// The route to delete a single transaction.
pub const DELETE_TRANSACTION: &str = "/api/transaction/{transaction_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/transaction/{transaction_id}',
/// '{transaction_id}' is the parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
