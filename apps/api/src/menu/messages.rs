//! User-facing message templates, one per failure kind.
//!
//! Defaults are the deployed tool's wording. An operator can override any subset
//! with a JSON file keyed by field name; missing fields keep their default and
//! unknown keys are rejected.
//!
//! Placeholders: `{genre}`, `{count}`, `{faces}`, `{value}`, `{input}`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::menu::error::MenuError;

/// Unknown genre. Replace `{genre}`.
pub const UNKNOWN_GENRE_TEMPLATE: &str = "指定されたジャンル '{genre}' は存在しません。";

/// Wrong number of dice. Replace `{genre}`, `{count}`.
pub const ARITY_MISMATCH_TEMPLATE: &str = "{genre}では{count}個のダイス目が必要です。";

/// Die value outside `1..=faces`. Replace `{faces}`, `{value}`.
pub const OUT_OF_RANGE_TEMPLATE: &str =
    "ははは、バカめ………このダイスは{faces}面体ダイスを使うんだよ……出直してきな……";

pub const MALFORMED_CONFIGURATION_TEMPLATE: &str =
    "……………おいおい、これぶっ壊れてねぇかぁ？対応してるメニューねぇぞ？";

/// Blank dice field. Replace `{count}`.
pub const MISSING_DICE_TEMPLATE: &str = "＼ダイス目を{count}つ全て入力するんだねー！！ﾏﾛﾏﾛﾏﾛﾏﾛ……／";

/// Non-numeric dice field. Replace `{input}`.
pub const INVALID_DICE_INPUT_TEMPLATE: &str = "あ、ああ、あ、あ、あああのっ！！だ、だだ、ダイス目は……は、は、半角数字を……つ、つつ、つかって、ほしい……か、かな………あ、ああ、ご、ごめんね？";

/// Shown for every request while the menu data is unavailable.
pub const MENU_UNAVAILABLE_TEMPLATE: &str =
    "おおっと……メニューデータが読み込めねぇな。ローカルサーバー環境になってない？あ、違う……？";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MessageTable {
    pub unknown_genre: String,
    pub arity_mismatch: String,
    pub out_of_range: String,
    pub malformed_configuration: String,
    pub missing_dice: String,
    pub invalid_dice_input: String,
    pub menu_unavailable: String,
}

impl Default for MessageTable {
    fn default() -> Self {
        Self {
            unknown_genre: UNKNOWN_GENRE_TEMPLATE.to_string(),
            arity_mismatch: ARITY_MISMATCH_TEMPLATE.to_string(),
            out_of_range: OUT_OF_RANGE_TEMPLATE.to_string(),
            malformed_configuration: MALFORMED_CONFIGURATION_TEMPLATE.to_string(),
            missing_dice: MISSING_DICE_TEMPLATE.to_string(),
            invalid_dice_input: INVALID_DICE_INPUT_TEMPLATE.to_string(),
            menu_unavailable: MENU_UNAVAILABLE_TEMPLATE.to_string(),
        }
    }
}

impl MessageTable {
    /// Reads template overrides from a JSON file.
    pub async fn load(path: &Path) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read message table {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Message table {} is not valid JSON", path.display()))
    }

    /// Renders the user-facing message for `error`.
    pub fn render(&self, error: &MenuError) -> String {
        match error {
            MenuError::UnknownGenre { genre } => {
                fill(&self.unknown_genre, &[("{genre}", genre.as_str())])
            }
            MenuError::ArityMismatch {
                genre, expected, ..
            } => {
                let count = expected.to_string();
                fill(
                    &self.arity_mismatch,
                    &[("{genre}", genre.as_str()), ("{count}", count.as_str())],
                )
            }
            MenuError::OutOfRange { value, dice_type } => {
                let faces = dice_type.to_string();
                let value = value.to_string();
                fill(
                    &self.out_of_range,
                    &[("{faces}", faces.as_str()), ("{value}", value.as_str())],
                )
            }
            MenuError::MalformedConfiguration { .. } => self.malformed_configuration.clone(),
            MenuError::MissingDice { expected } => {
                let count = expected.to_string();
                fill(&self.missing_dice, &[("{count}", count.as_str())])
            }
            MenuError::InvalidDiceInput { input } => {
                fill(&self.invalid_dice_input, &[("{input}", input.as_str())])
            }
        }
    }
}

fn fill(template: &str, replacements: &[(&str, &str)]) -> String {
    replacements
        .iter()
        .fold(template.to_string(), |text, (placeholder, value)| {
            text.replace(placeholder, value)
        })
}
