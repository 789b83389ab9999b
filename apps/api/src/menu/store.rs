//! Menu Store — the immutable genre table the engine resolves against.
//!
//! Built once by [`crate::menu::loader`] and shared read-only behind an `Arc`.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Reserved top-level key holding the special-effect table. Never a genre.
pub const SPECIAL_EFFECT_KEY: &str = "特殊効果";

/// First-fragment text that triggers the special-effect expansion.
pub const SPECIAL_EFFECT_MARKER: &str = "特殊効果つき";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Generation rule for one genre.
///
/// `lists[name][face - 1]` is the fragment for rolling `face` in a slot whose part is `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreRule {
    /// Faces on the die shared by every slot of this genre.
    #[serde(rename = "diceType", alias = "dice_type")]
    pub dice_type: u32,
    /// One list name per dice slot, in roll order.
    pub parts: Vec<String>,
    #[serde(alias = "リスト")]
    pub lists: HashMap<String, Vec<String>>,
}

/// Supplementary table listed under a special-effect result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialEffectRule {
    #[serde(rename = "diceType", alias = "dice_type")]
    pub dice_type: u32,
    #[serde(alias = "リスト")]
    pub lists: Vec<String>,
}

/// What the genre picker needs to render a choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreSummary {
    pub name: String,
    pub dice_type: u32,
    pub dice_count: usize,
}

/// Validated, read-only menu table. Genres keep their file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuStore {
    genres: IndexMap<String, GenreRule>,
    special_effect: Option<SpecialEffectRule>,
}

impl MenuStore {
    pub fn new(
        genres: IndexMap<String, GenreRule>,
        special_effect: Option<SpecialEffectRule>,
    ) -> Self {
        Self {
            genres,
            special_effect,
        }
    }

    pub fn genre(&self, name: &str) -> Option<&GenreRule> {
        self.genres.get(name)
    }

    pub fn special_effect(&self) -> Option<&SpecialEffectRule> {
        self.special_effect.as_ref()
    }

    pub fn genre_count(&self) -> usize {
        self.genres.len()
    }

    /// Genre choices in file order.
    pub fn summaries(&self) -> Vec<GenreSummary> {
        self.genres
            .iter()
            .map(|(name, rule)| GenreSummary {
                name: name.clone(),
                dice_type: rule.dice_type,
                dice_count: rule.parts.len(),
            })
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
