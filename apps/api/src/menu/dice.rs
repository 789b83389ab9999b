//! Dice input parsing — raw form values to integers, before any menu lookup.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::menu::error::MenuError;

/// One dice field as submitted. Forms send text; API clients may send numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DiceInput {
    Value(i64),
    Text(String),
    /// Any other JSON value: `null`, fractions, integers beyond `i64`, arrays, objects.
    Other(Value),
}

/// Parses submitted dice fields into integers.
///
/// A blank field anywhere wins over a non-numeric one, so a half-filled form
/// always gets the "fill every field" message. `expected` is the number of
/// fields the form should have had and is only used for that message.
/// `null` counts as blank. Text must be a whole base-10 integer after trimming;
/// trailing characters (`"3abc"`, `"2.5"`) are rejected rather than truncated.
/// Range checks belong to [`crate::menu::engine::resolve`].
pub fn parse_dice_inputs(inputs: &[DiceInput], expected: usize) -> Result<Vec<i64>, MenuError> {
    let any_blank = inputs
        .iter()
        .any(|input| match input {
            DiceInput::Text(text) => text.trim().is_empty(),
            DiceInput::Other(value) => value.is_null(),
            DiceInput::Value(_) => false,
        });
    if any_blank {
        return Err(MenuError::MissingDice { expected });
    }

    inputs
        .iter()
        .map(|input| match input {
            DiceInput::Value(value) => Ok(*value),
            DiceInput::Text(text) => {
                text.trim()
                    .parse::<i64>()
                    .map_err(|_| MenuError::InvalidDiceInput {
                        input: text.clone(),
                    })
            }
            DiceInput::Other(value) => Err(MenuError::InvalidDiceInput {
                input: value.to_string(),
            }),
        })
        .collect()
}
