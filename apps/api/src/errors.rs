use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::menu::{ErrorKind, MenuError, MessageTable};

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The user-facing message is rendered from the [`MessageTable`] when the error is
/// built, since `into_response` has no access to application state.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Menu error: {error}")]
    Menu { error: MenuError, message: String },

    #[error("Menu data unavailable: {}", kind.code())]
    MenuUnavailable { kind: ErrorKind, message: String },
}

impl AppError {
    pub fn menu(error: MenuError, messages: &MessageTable) -> Self {
        let message = messages.render(&error);
        AppError::Menu { error, message }
    }

    pub fn unavailable(kind: ErrorKind, messages: &MessageTable) -> Self {
        AppError::MenuUnavailable {
            kind,
            message: messages.menu_unavailable.clone(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Menu { error, .. } => error.kind(),
            AppError::MenuUnavailable { .. } => ErrorKind::MenuUnavailable,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.kind().code();
        let (status, message) = match self {
            AppError::Menu { error, message } => {
                let status = match error.kind() {
                    ErrorKind::UnknownGenre => StatusCode::NOT_FOUND,
                    ErrorKind::MalformedConfiguration => {
                        tracing::error!("Menu data defect: {error}");
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                    _ => StatusCode::BAD_REQUEST,
                };
                (status, message)
            }
            AppError::MenuUnavailable { kind, message } => {
                tracing::warn!("Rejected request, menu data unavailable ({})", kind.code());
                (StatusCode::SERVICE_UNAVAILABLE, message)
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
