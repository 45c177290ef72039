//! Defines the page and route handler for an internal server error.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// Renders as the 500 page.
pub struct InternalServerError;

impl IntoResponse for InternalServerError {
    fn into_response(self) -> Response {
        let page = error_view(
            "Internal Server Error",
            "500",
            "Sorry, something went wrong.",
            "Try again later or check the server logs",
        );

        (StatusCode::INTERNAL_SERVER_ERROR, Html(page.into_string())).into_response()
    }
}

pub async fn get_internal_server_error_page() -> Response {
    InternalServerError.into_response()
}
