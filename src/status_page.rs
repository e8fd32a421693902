//! The status page served at the root route, a quick way to check that the server is up.

use maud::{DOCTYPE, Markup, html};

use crate::endpoints;

/// One row in the list of API endpoints.
struct EndpointSummary {
    method: &'static str,
    path: &'static str,
    description: &'static str,
}

const API_ENDPOINTS: [EndpointSummary; 3] = [
    EndpointSummary {
        method: "GET",
        path: endpoints::TRANSACTIONS_API,
        description: "list all transactions",
    },
    EndpointSummary {
        method: "POST",
        path: endpoints::POST_TRANSACTION,
        description: "add a transaction",
    },
    EndpointSummary {
        method: "DELETE",
        path: "/api/transaction/<id>",
        description: "delete a transaction",
    },
];

/// Render the status page listing the available API endpoints.
pub async fn get_status_page() -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                title { "Backend Status" }
            }

            body style="font-family:sans-serif; max-width:600px; margin:20px auto;"
            {
                h2 { "Backend is live!" }
                p { "Available API endpoints:" }
                ul
                {
                    @for endpoint in &API_ENDPOINTS
                    {
                        li
                        {
                            code { (endpoint.method) " " (endpoint.path) }
                            " - " (endpoint.description)
                        }
                    }
                }
            }
        }
    }
}
