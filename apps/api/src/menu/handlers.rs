//! Axum route handlers for the Menu API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::menu::dice::{parse_dice_inputs, DiceInput};
use crate::menu::engine::resolve;
use crate::menu::store::GenreSummary;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub genre: String,
    pub dice: Vec<DiceInput>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub genre: String,
    pub dice: Vec<i64>,
    /// Ready to display or copy as-is.
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct GenreListResponse {
    pub genres: Vec<GenreSummary>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/genres
///
/// Genre choices in menu-file order, special-effect entry excluded.
pub async fn handle_list_genres(
    State(state): State<AppState>,
) -> Result<Json<GenreListResponse>, AppError> {
    let store = state.menu_store()?;
    Ok(Json(GenreListResponse {
        genres: store.summaries(),
    }))
}

/// POST /api/v1/menu/generate
///
/// Parses the raw dice fields, then resolves them against the selected genre.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let store = state.menu_store()?;

    // The blank-field message names the genre's slot count when the genre exists
    let expected = store
        .genre(&request.genre)
        .map(|rule| rule.parts.len())
        .unwrap_or(request.dice.len());

    let dice = parse_dice_inputs(&request.dice, expected)
        .map_err(|e| AppError::menu(e, &state.messages))?;

    let text = resolve(store, &request.genre, &dice)
        .map_err(|e| AppError::menu(e, &state.messages))?;

    debug!("Generated menu for genre '{}' from dice {:?}", request.genre, dice);

    Ok(Json(GenerateResponse {
        genre: request.genre,
        dice,
        text,
    }))
}
