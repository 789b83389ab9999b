use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::{AppState, MenuState};

/// GET /health
/// Returns service status and whether the menu data loaded.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let (status, menu_error) = match &state.menu {
        MenuState::Ready(_) => ("ok", None),
        MenuState::Unavailable(kind) => ("degraded", Some(kind.code())),
    };

    Json(json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "service": "dicemenu",
        "menu_loaded": menu_error.is_none(),
        "menu_error": menu_error,
        "validation": state.config.validation,
    }))
}
