//! Menu Loader — reads the menu data file once at startup and validates it.
//!
//! A failure here disables generation for the life of the process. Nothing retries.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::menu::error::ErrorKind;
use crate::menu::store::{GenreRule, MenuStore, SpecialEffectRule, SPECIAL_EFFECT_KEY};

/// How strictly list lengths are checked against `diceType`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Lists may be any length. Short lists surface as malformed-configuration at roll time.
    #[default]
    Lenient,
    /// Every referenced list must hold exactly `diceType` entries.
    Strict,
}

impl FromStr for ValidationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(ValidationPolicy::Lenient),
            "strict" => Ok(ValidationPolicy::Strict),
            other => Err(format!(
                "unknown validation policy '{other}' (expected 'lenient' or 'strict')"
            )),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("menu data could not be read from {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("menu data is not a JSON object of genres: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("menu entry '{entry}' is invalid: {reason}")]
    Integrity { entry: String, reason: String },

    #[error("menu data defines no genres")]
    NoGenres,
}

impl LoadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoadError::Unreadable { .. } | LoadError::Malformed(_) => {
                ErrorKind::ConfigurationLoadFailure
            }
            LoadError::Integrity { .. } | LoadError::NoGenres => {
                ErrorKind::ConfigurationIntegrityFailure
            }
        }
    }

    fn integrity(entry: &str, reason: impl Into<String>) -> Self {
        LoadError::Integrity {
            entry: entry.to_string(),
            reason: reason.into(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Loading
// ────────────────────────────────────────────────────────────────────────────

/// Reads and validates the menu data file at `path`.
pub async fn load_menu_store(
    path: &Path,
    policy: ValidationPolicy,
) -> Result<MenuStore, LoadError> {
    info!("Loading menu data from {}", path.display());

    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

    let store = parse_menu_store(&raw, policy)?;
    info!(
        "Menu data loaded: {} genres, special effects {} ({:?} validation)",
        store.genre_count(),
        if store.special_effect().is_some() { "present" } else { "absent" },
        policy
    );
    Ok(store)
}

/// Parses raw menu JSON into a validated [`MenuStore`].
///
/// Checks, in order:
/// 1. The document is a JSON object (load failure otherwise)
/// 2. Each entry has the shape its key implies (genre or special effect)
/// 3. At least one genre exists besides the special-effect entry
/// 4. `diceType >= 1`, at least one part, every part names a list
/// 5. Strict policy only: list lengths equal `diceType`
pub fn parse_menu_store(raw: &str, policy: ValidationPolicy) -> Result<MenuStore, LoadError> {
    let entries: IndexMap<String, Value> = serde_json::from_str(raw)?;

    let mut genres = IndexMap::new();
    let mut special_effect = None;

    for (name, value) in entries {
        if name == SPECIAL_EFFECT_KEY {
            let rule: SpecialEffectRule = serde_json::from_value(value)
                .map_err(|e| LoadError::integrity(&name, e.to_string()))?;
            validate_special_effect(&name, &rule, policy)?;
            special_effect = Some(rule);
        } else {
            let rule: GenreRule = serde_json::from_value(value)
                .map_err(|e| LoadError::integrity(&name, e.to_string()))?;
            validate_genre(&name, &rule, policy)?;
            genres.insert(name, rule);
        }
    }

    if genres.is_empty() {
        return Err(LoadError::NoGenres);
    }

    Ok(MenuStore::new(genres, special_effect))
}

fn validate_genre(name: &str, rule: &GenreRule, policy: ValidationPolicy) -> Result<(), LoadError> {
    if rule.dice_type < 1 {
        return Err(LoadError::integrity(name, "diceType must be at least 1"));
    }
    if rule.parts.is_empty() {
        return Err(LoadError::integrity(name, "parts must name at least one list"));
    }

    for part in &rule.parts {
        let list = rule
            .lists
            .get(part)
            .ok_or_else(|| LoadError::integrity(name, format!("part '{part}' has no list")))?;

        if policy == ValidationPolicy::Strict && list.len() != rule.dice_type as usize {
            return Err(LoadError::integrity(
                name,
                format!(
                    "list '{part}' has {} entries but diceType is {}",
                    list.len(),
                    rule.dice_type
                ),
            ));
        }
    }

    Ok(())
}

fn validate_special_effect(
    name: &str,
    rule: &SpecialEffectRule,
    policy: ValidationPolicy,
) -> Result<(), LoadError> {
    if rule.dice_type < 1 {
        return Err(LoadError::integrity(name, "diceType must be at least 1"));
    }
    if policy == ValidationPolicy::Strict && rule.lists.len() != rule.dice_type as usize {
        return Err(LoadError::integrity(
            name,
            format!(
                "effect list has {} entries but diceType is {}",
                rule.lists.len(),
                rule.dice_type
            ),
        ));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
