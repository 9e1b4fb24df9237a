//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server errors to Sentry
//! before responding to the client. All route handlers return
//! `Result<T, AppError>`. Error bodies are `{"detail": message}` with the
//! fixed localized messages the frontend matches on.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use emporio_core::{CartError, OrderError};

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// No catalog item with the requested id.
    #[error("catalog item not found")]
    ItemNotFound,

    /// No cart line with the requested id.
    #[error("cart line not found")]
    CartItemNotFound,

    /// Order submitted with zero lines.
    #[error("empty order")]
    EmptyOrder,

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CartError> for AppError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::NotFound(_) => Self::CartItemNotFound,
        }
    }
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::Empty => Self::EmptyOrder,
        }
    }
}

/// JSON error body: `{"detail": "..."}`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::ItemNotFound | Self::CartItemNotFound => StatusCode::NOT_FOUND,
            Self::EmptyOrder => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Fixed localized messages; internal details never reach clients
        let detail = match &self {
            Self::ItemNotFound => "Item não encontrado",
            Self::CartItemNotFound => "Item não encontrado no carrinho",
            Self::EmptyOrder => "Carrinho vazio",
            Self::Internal(_) => "Erro interno do servidor",
        };

        (
            status,
            Json(ErrorBody {
                detail: detail.to_string(),
            }),
        )
            .into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
