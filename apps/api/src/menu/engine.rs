//! Menu Resolution — turns a genre and its dice results into the composed menu text.
//!
//! Pure over `(MenuStore, genre, dice)`: no I/O, no shared mutable state, no panics.
//! Every failure comes back as a [`MenuError`].

use tracing::{debug, warn};

use crate::menu::error::MenuError;
use crate::menu::store::{GenreRule, MenuStore, SpecialEffectRule, SPECIAL_EFFECT_MARKER};

/// Separator between an effect's index and its text.
const FULL_WIDTH_SPACE: char = '\u{3000}';

/// Resolves `dice` against `genre` and composes the result text.
///
/// Steps:
/// 1. Look up the genre
/// 2. Check the dice count against the genre's parts
/// 3. Range-check each value against `diceType`, reporting the first offender
/// 4. Pick one fragment per slot and join with spaces
/// 5. Wrap in 「」, appending the special-effect table when the first fragment is the marker
pub fn resolve(store: &MenuStore, genre: &str, dice: &[i64]) -> Result<String, MenuError> {
    let rule = store.genre(genre).ok_or_else(|| MenuError::UnknownGenre {
        genre: genre.to_string(),
    })?;

    if dice.len() != rule.parts.len() {
        return Err(MenuError::ArityMismatch {
            genre: genre.to_string(),
            expected: rule.parts.len(),
            actual: dice.len(),
        });
    }

    let max_face = i64::from(rule.dice_type);
    if let Some(&value) = dice.iter().find(|&&d| d < 1 || d > max_face) {
        return Err(MenuError::OutOfRange {
            value,
            dice_type: rule.dice_type,
        });
    }

    let fragments = rule
        .parts
        .iter()
        .zip(dice)
        .map(|(part, &face)| fragment(genre, rule, part, face))
        .collect::<Result<Vec<&str>, MenuError>>()?;

    let headline = format!("「{}」", fragments.join(" "));

    if fragments.first().copied() != Some(SPECIAL_EFFECT_MARKER) {
        return Ok(headline);
    }

    match store.special_effect() {
        Some(special) => Ok(expand_special_effect(&headline, special)),
        None => {
            debug!("Genre '{genre}' rolled a special effect but no effect table is configured");
            Ok(headline)
        }
    }
}

/// Looks up the fragment for `face` in the list named by `part`.
fn fragment<'a>(
    genre: &str,
    rule: &'a GenreRule,
    part: &str,
    face: i64,
) -> Result<&'a str, MenuError> {
    let index = usize::try_from(face - 1).ok();

    rule.lists
        .get(part)
        .zip(index)
        .and_then(|(list, i)| list.get(i))
        .map(String::as_str)
        .ok_or_else(|| {
            warn!("Menu data for genre '{genre}' has no fragment in list '{part}' for face {face}");
            MenuError::MalformedConfiguration {
                genre: genre.to_string(),
                part: part.to_string(),
                face,
            }
        })
}

/// Appends the special-effect roll table under the headline.
///
/// ```text
/// 「<headline text>」
///
/// dice1d<N>=
/// 1　<effect 1>
/// 2　<effect 2>
/// ```
pub fn expand_special_effect(headline: &str, special: &SpecialEffectRule) -> String {
    let effects = special
        .lists
        .iter()
        .enumerate()
        .map(|(i, effect)| format!("{}{FULL_WIDTH_SPACE}{effect}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{headline}\n\ndice1d{}=\n{effects}", special.dice_type)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::error::ErrorKind;
    use crate::menu::loader::{parse_menu_store, ValidationPolicy};
    use proptest::prelude::*;

    const FOOD: &str = r#"{
        "Food": {
            "diceType": 6,
            "parts": ["adj", "noun"],
            "lists": {
                "adj": ["Spicy", "Sweet", "Sour", "Bitter", "Salty", "Umami"],
                "noun": ["Ramen", "Soup", "Rice", "Noodle", "Stew", "Curry"]
            }
        }
    }"#;

    const WITH_EFFECTS: &str = r#"{
        "Potion": {
            "dice_type": 2,
            "parts": ["kind", "base"],
            "リスト": {
                "kind": ["特殊効果つき", "普通の"],
                "base": ["スープ", "ジュース"]
            }
        },
        "特殊効果": {"dice_type": 3, "リスト": ["E1", "E2", "E3"]}
    }"#;

    const WITHOUT_EFFECTS: &str = r#"{
        "Potion": {
            "dice_type": 2,
            "parts": ["kind", "base"],
            "リスト": {
                "kind": ["特殊効果つき", "普通の"],
                "base": ["スープ", "ジュース"]
            }
        }
    }"#;

    fn store(raw: &str) -> MenuStore {
        parse_menu_store(raw, ValidationPolicy::Lenient).unwrap()
    }

    #[test]
    fn test_food_example_composes_fragments() {
        let text = resolve(&store(FOOD), "Food", &[2, 5]).unwrap();
        assert_eq!(text, "「Sweet Stew」");
    }

    #[test]
    fn test_edge_faces_resolve() {
        let food = store(FOOD);
        assert_eq!(resolve(&food, "Food", &[1, 1]).unwrap(), "「Spicy Ramen」");
        assert_eq!(resolve(&food, "Food", &[6, 6]).unwrap(), "「Umami Curry」");
    }

    #[test]
    fn test_unknown_genre() {
        let err = resolve(&store(FOOD), "Drinks", &[1, 1]).unwrap_err();
        assert_eq!(
            err,
            MenuError::UnknownGenre {
                genre: "Drinks".to_string()
            }
        );
    }

    #[test]
    fn test_reserved_key_is_unknown_genre() {
        let err = resolve(&store(WITH_EFFECTS), "特殊効果", &[1]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownGenre);
    }

    #[test]
    fn test_too_few_dice() {
        let err = resolve(&store(FOOD), "Food", &[2]).unwrap_err();
        assert_eq!(
            err,
            MenuError::ArityMismatch {
                genre: "Food".to_string(),
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_arity_checked_before_range() {
        let err = resolve(&store(FOOD), "Food", &[0, 0, 0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArityMismatch);
    }

    #[test]
    fn test_first_out_of_range_value_reported() {
        let err = resolve(&store(FOOD), "Food", &[9, 0]).unwrap_err();
        assert_eq!(
            err,
            MenuError::OutOfRange {
                value: 9,
                dice_type: 6
            },
            "Only the first offending die is reported"
        );
    }

    #[test]
    fn test_out_of_range_in_second_slot() {
        let err = resolve(&store(FOOD), "Food", &[3, 7]).unwrap_err();
        assert_eq!(
            err,
            MenuError::OutOfRange {
                value: 7,
                dice_type: 6
            }
        );
    }

    #[test]
    fn test_short_list_is_malformed_configuration() {
        let raw = r#"{"Food": {"dice_type": 6, "parts": ["a"], "リスト": {"a": ["x", "y"]}}}"#;
        let err = resolve(&store(raw), "Food", &[5]).unwrap_err();
        assert_eq!(
            err,
            MenuError::MalformedConfiguration {
                genre: "Food".to_string(),
                part: "a".to_string(),
                face: 5
            }
        );
    }

    #[test]
    fn test_short_list_still_serves_covered_faces() {
        let raw = r#"{"Food": {"dice_type": 6, "parts": ["a"], "リスト": {"a": ["x", "y"]}}}"#;
        assert_eq!(resolve(&store(raw), "Food", &[2]).unwrap(), "「y」");
    }

    #[test]
    fn test_special_effect_expansion() {
        let text = resolve(&store(WITH_EFFECTS), "Potion", &[1, 2]).unwrap();
        assert_eq!(
            text,
            "「特殊効果つき ジュース」\n\ndice1d3=\n1　E1\n2　E2\n3　E3"
        );
    }

    #[test]
    fn test_special_effect_without_table_is_plain() {
        let text = resolve(&store(WITHOUT_EFFECTS), "Potion", &[1, 1]).unwrap();
        assert_eq!(text, "「特殊効果つき スープ」");
    }

    #[test]
    fn test_marker_outside_first_slot_does_not_expand() {
        let raw = r#"{
            "Potion": {
                "dice_type": 1,
                "parts": ["base", "kind"],
                "リスト": {"base": ["スープ"], "kind": ["特殊効果つき"]}
            },
            "特殊効果": {"dice_type": 1, "リスト": ["E1"]}
        }"#;
        let text = resolve(&store(raw), "Potion", &[1, 1]).unwrap();
        assert_eq!(text, "「スープ 特殊効果つき」");
    }

    #[test]
    fn test_plain_result_ignores_effect_table() {
        let text = resolve(&store(WITH_EFFECTS), "Potion", &[2, 1]).unwrap();
        assert_eq!(text, "「普通の スープ」");
    }

    #[test]
    fn test_expand_with_empty_effect_list() {
        let special = SpecialEffectRule {
            dice_type: 4,
            lists: vec![],
        };
        assert_eq!(expand_special_effect("「x」", &special), "「x」\n\ndice1d4=\n");
    }

    #[test]
    fn test_brackets_applied_once() {
        let text = resolve(&store(WITH_EFFECTS), "Potion", &[1, 1]).unwrap();
        assert_eq!(text.matches('「').count(), 1);
        assert_eq!(text.matches('」').count(), 1);
    }

    proptest! {
        #[test]
        fn prop_valid_rolls_succeed(a in 1i64..=6, b in 1i64..=6) {
            let text = resolve(&store(FOOD), "Food", &[a, b]).unwrap();
            prop_assert!(text.starts_with('「') && text.ends_with('」'));
            prop_assert!(text.chars().count() > 2);
        }

        #[test]
        fn prop_resolve_is_idempotent(a in 1i64..=2, b in 1i64..=2) {
            let menu = store(WITH_EFFECTS);
            prop_assert_eq!(
                resolve(&menu, "Potion", &[a, b]),
                resolve(&menu, "Potion", &[a, b])
            );
        }

        #[test]
        fn prop_out_of_range_reports_value(
            value in prop_oneof![i64::MIN..1i64, 7i64..i64::MAX],
            other in 1i64..=6,
        ) {
            let err = resolve(&store(FOOD), "Food", &[other, value]).unwrap_err();
            prop_assert_eq!(err, MenuError::OutOfRange { value, dice_type: 6 });
        }

        #[test]
        fn prop_wrong_arity_fails(dice in prop::collection::vec(1i64..=6, 0..8)) {
            prop_assume!(dice.len() != 2);
            let err = resolve(&store(FOOD), "Food", &dice).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::ArityMismatch);
        }

        #[test]
        fn prop_unknown_genre_fails(genre in "[a-z]{1,12}") {
            let err = resolve(&store(FOOD), &genre, &[1, 1]).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::UnknownGenre);
        }
    }
}
