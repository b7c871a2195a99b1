//! Noun inflection for single words and compound identifiers
//!
//! Only the final word of a compound is inflected: `MyFooBox` becomes
//! `MyFooBoxes`, `blog_entry` becomes `blog_entries`.

use crate::core::compose::Composer;
use crate::core::error::{Direction, GrammarError, Result};
use crate::core::notation::{underscorize, NotationRules};
use crate::core::rules::RuleTable;

/// Split a string into the text before its final word and the final word
///
/// - Text with spaces splits after the last space.
/// - `underscore_notation` (anything [`underscorize`] leaves unchanged) splits
///   after the last underscore, or not at all.
/// - `camelCase` splits off a trailing digit run that follows a letter, or a
///   trailing capital followed by lower-case letters.
///
/// # Examples
///
/// ```
/// use grammar::core::inflect::split_last_word;
/// use grammar::core::notation::NotationRules;
///
/// let rules = NotationRules::new();
/// assert_eq!(split_last_word(&rules, "MyFooBox"), ("MyFoo", "Box"));
/// assert_eq!(split_last_word(&rules, "blog_entry"), ("blog_", "entry"));
/// assert_eq!(split_last_word(&rules, "Blog Entry"), ("Blog ", "Entry"));
/// ```
pub fn split_last_word<'a>(rules: &NotationRules, string: &'a str) -> (&'a str, &'a str) {
    if let Some(pos) = string.rfind(' ') {
        return string.split_at(pos + 1);
    }

    if string == underscorize(rules, string) {
        return match string.rfind('_') {
            Some(pos) => string.split_at(pos + 1),
            None => ("", string),
        };
    }

    match camel_final_word_start(string) {
        Some(pos) => string.split_at(pos),
        None => ("", string),
    }
}

/// Byte offset of the final `camelCase` word, if the string ends in one
fn camel_final_word_start(string: &str) -> Option<usize> {
    let bytes = string.as_bytes();
    let last = *bytes.last()?;

    let start = if last.is_ascii_digit() {
        let digits = bytes.iter().rev().take_while(|b| b.is_ascii_digit()).count();
        let start = bytes.len() - digits;
        // A digit run must follow a letter or start the string
        if start > 0 && !bytes[start - 1].is_ascii_alphabetic() {
            return None;
        }
        start
    } else {
        let lower = bytes
            .iter()
            .rev()
            .take_while(|b| b.is_ascii_lowercase())
            .count();
        let capital = bytes.len().checked_sub(lower + 1)?;
        if !bytes[capital].is_ascii_uppercase() {
            return None;
        }
        capital
    };

    if start > 0 && !bytes[start - 1].is_ascii_alphanumeric() {
        return None;
    }
    Some(start)
}

/// Inflect the final word of `word` with the first matching rule of `table`
pub fn inflect(
    table: &RuleTable,
    rules: &NotationRules,
    composer: &dyn Composer,
    word: &str,
    direction: Direction,
) -> Result<String> {
    let (beginning, last_word) = split_last_word(rules, word);

    match table.apply(last_word) {
        Some((index, inflected)) => {
            tracing::trace!(word = %word, direction = %direction, rule = index, "inflected");
            Ok(format!("{}{}", beginning, inflected))
        }
        None => {
            tracing::warn!(word = %word, direction = %direction, "no inflection rule matched");
            let template = match direction {
                Direction::Pluralize => "The noun specified, %s, could not be pluralized",
                Direction::Singularize => "The noun specified, %s, could not be singularized",
            };
            Err(GrammarError::Inflection {
                word: word.to_string(),
                direction,
                message: composer.compose(template, &[word]),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::compose::PositionalComposer;

    fn pluralize(table: &RuleTable, rules: &NotationRules, word: &str) -> Result<String> {
        inflect(table, rules, &PositionalComposer, word, Direction::Pluralize)
    }

    fn singularize(table: &RuleTable, rules: &NotationRules, word: &str) -> Result<String> {
        inflect(table, rules, &PositionalComposer, word, Direction::Singularize)
    }

    #[test]
    fn test_split_spaces() {
        let rules = NotationRules::new();
        assert_eq!(split_last_word(&rules, "my blue car"), ("my blue ", "car"));
        assert_eq!(split_last_word(&rules, "trailing "), ("trailing ", ""));
    }

    #[test]
    fn test_split_underscore() {
        let rules = NotationRules::new();
        assert_eq!(split_last_word(&rules, "user_category"), ("user_", "category"));
        assert_eq!(split_last_word(&rules, "category"), ("", "category"));
    }

    #[test]
    fn test_split_camel() {
        let rules = NotationRules::new();
        assert_eq!(split_last_word(&rules, "MyFooBox"), ("MyFoo", "Box"));
        assert_eq!(split_last_word(&rules, "myFooBoxes"), ("myFoo", "Boxes"));
        assert_eq!(split_last_word(&rules, "Person"), ("", "Person"));
        assert_eq!(split_last_word(&rules, "fooBar12"), ("fooBar", "12"));
        assert_eq!(split_last_word(&rules, "fooBAR"), ("fooBA", "R"));
        assert_eq!(split_last_word(&rules, "HTMLParser"), ("HTML", "Parser"));
    }

    #[test]
    fn test_split_camel_without_final_word() {
        let rules = NotationRules::new();
        assert_eq!(split_last_word(&rules, "fooBar1x"), ("", "fooBar1x"));
        assert_eq!(split_last_word(&rules, "foo-Bar"), ("", "foo-Bar"));
    }

    #[test]
    fn test_pluralize_compound() {
        let rules = NotationRules::new();
        let table = RuleTable::singular_to_plural();
        assert_eq!(pluralize(&table, &rules, "MyFooBox").unwrap(), "MyFooBoxes");
        assert_eq!(
            pluralize(&table, &rules, "user_category").unwrap(),
            "user_categories"
        );
        assert_eq!(pluralize(&table, &rules, "Blog Entry").unwrap(), "Blog Entries");
    }

    #[test]
    fn test_singularize_compound() {
        let rules = NotationRules::new();
        let table = RuleTable::plural_to_singular();
        assert_eq!(singularize(&table, &rules, "MyFooBoxes").unwrap(), "MyFooBox");
        assert_eq!(
            singularize(&table, &rules, "user_categories").unwrap(),
            "user_category"
        );
    }

    #[test]
    fn test_empty_word_is_uninflectable() {
        let rules = NotationRules::new();
        let table = RuleTable::singular_to_plural();
        let err = pluralize(&table, &rules, "").unwrap_err();
        assert!(err.is_inflection());
        assert_eq!(err.to_string(), "The noun specified, , could not be pluralized");
    }
}
