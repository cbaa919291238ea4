use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use warbler_core::CoreError;

use crate::templates::NOT_FOUND_HTML;

#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    #[error("not found")]
    NotFound,
    #[error("forbidden")]
    Forbidden,
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("failed to render template: {0}")]
    Render(#[from] sailfish::RenderError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::NotFound => (StatusCode::NOT_FOUND, Html(NOT_FOUND_HTML)).into_response(),
            ServerError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden").into_response(),
            err => {
                log::error!("{err}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
