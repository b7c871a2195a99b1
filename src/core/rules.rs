//! Ordered pattern/replacement tables for noun inflection
//!
//! A [`RuleTable`] is scanned front to back and the first matching [`Rule`]
//! wins. Irregular forms therefore sit before the general suffix rules, and
//! custom rules are pushed to the front so they beat everything built in.
//! Each built-in table ends with a catch-all rule, so any non-empty word
//! matches something.
//!
//! A fully upper-case multi-letter match upper-cases its replacement. The
//! facade only passes whole words to a table for space-separated and
//! `underscore_form` input (`MY BOX` → `MY BOXES`, `shipping_BOX` →
//! `shipping_BOXES`). Anything else is treated as camelCase and split on the
//! last capital, so `BOX` → `BOXs` and `CARS` singularizes to itself.

use crate::core::error::{GrammarError, Result};
use regex::{Regex, RegexBuilder};
use std::collections::VecDeque;

/// A single case-insensitive pattern with its replacement template
///
/// Templates use the `regex` crate syntax (`${1}` for the first capture
/// group). An optional exception pattern vetoes the rule for words it matches.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    replacement: String,
    unless: Option<Regex>,
}

impl Rule {
    /// Build a rule from a pattern and a replacement template
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: compile(pattern)?,
            replacement: replacement.to_string(),
            unless: None,
        })
    }

    /// Skip this rule for words matching `exception`
    pub fn unless(mut self, exception: &str) -> Result<Self> {
        self.unless = Some(compile(exception)?);
        Ok(self)
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Apply the rule to `word`, returning `None` when it does not match
    pub fn apply(&self, word: &str) -> Option<String> {
        if self.unless.as_ref().is_some_and(|re| re.is_match(word)) {
            return None;
        }

        let caps = self.pattern.captures(word)?;
        let matched = caps.get(0)?;

        let mut substituted = String::new();
        caps.expand(&self.replacement, &mut substituted);

        let mut output = String::with_capacity(word.len() + substituted.len());
        output.push_str(&word[..matched.start()]);
        output.push_str(&restore_case(matched.as_str(), substituted));
        output.push_str(&word[matched.end()..]);
        Some(output)
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| GrammarError::Configuration {
            message: format!("Invalid inflection pattern '{}': {}", pattern, e),
        })
}

/// Re-apply the casing of a fully upper-case span to its replacement
///
/// Mixed and capitalized spans already carry their case through the capture
/// groups, so only the shouting case needs help. This only sees the word the
/// table is handed: through [`crate::Grammar`] a bare `BOX` is split on its
/// last capital first and comes back as `BOXs`.
fn restore_case(matched: &str, replaced: String) -> String {
    let mut letters = matched.chars().filter(|c| c.is_alphabetic()).peekable();
    if letters.peek().is_none() {
        return replaced;
    }

    let mut count = 0;
    for c in letters {
        if !c.is_uppercase() {
            return replaced;
        }
        count += 1;
    }

    if count > 1 {
        replaced.to_uppercase()
    } else {
        replaced
    }
}

/// Ordered rule list with first-match-wins lookup
///
/// Backed by a `VecDeque` so that custom rules can be pushed to the front
/// cheaply. The linear scan is the precedence mechanism.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: VecDeque<Rule>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule at the lowest precedence
    pub fn push(&mut self, rule: Rule) {
        self.rules.push_back(rule);
    }

    /// Insert a rule ahead of every existing rule
    pub fn prepend(&mut self, rule: Rule) {
        self.rules.push_front(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Run `word` through the table, returning the matched rule index and the result
    pub fn apply(&self, word: &str) -> Option<(usize, String)> {
        self.rules
            .iter()
            .enumerate()
            .find_map(|(index, rule)| rule.apply(word).map(|output| (index, output)))
    }

    /// Built-in singular to plural rules
    pub fn singular_to_plural() -> Self {
        build_table(&[
            (r"([ml])ouse$", "${1}ice", None),
            (r"(media|info(rmation)?|news)$", "${1}", None),
            (r"(phot|log)o$", "${1}os", None),
            (r"^(q)uiz$", "${1}uizzes", None),
            (r"(c)hild$", "${1}hildren", None),
            (r"(p)erson$", "${1}eople", None),
            (r"(m)an$", "${1}en", None),
            (r"([ieu]s|[ieuo]x)$", "${1}es", None),
            (r"([cs]h)$", "${1}es", None),
            (r"(ss)$", "${1}es", None),
            (r"([aeo]l)f$", "${1}ves", None),
            (r"([^d]ea)f$", "${1}ves", None),
            (r"(ar)f$", "${1}ves", None),
            (r"([nlw]i)fe$", "${1}ves", None),
            (r"([aeiou]y)$", "${1}s", None),
            (r"([^aeiou])y$", "${1}ies", None),
            (r"([^o])o$", "${1}oes", None),
            (r"s$", "ses", None),
            (r"(.)$", "${1}s", None),
        ])
    }

    /// Built-in plural to singular rules
    pub fn plural_to_singular() -> Self {
        build_table(&[
            (r"([ml])ice$", "${1}ouse", None),
            (r"(media|info(rmation)?|news)$", "${1}", None),
            (r"(q)uizzes$", "${1}uiz", None),
            (r"(c)hildren$", "${1}hild", None),
            (r"(p)eople$", "${1}erson", None),
            (r"(m)en$", "${1}an", None),
            (r"(.)oes$", "${1}o", Some(r"shoes$")),
            (r"(^|[^o])([ieu]s)es$", "${1}${2}", None),
            (r"([ieuo]x)es$", "${1}", None),
            (r"([cs]h)es$", "${1}", None),
            (r"(ss)es$", "${1}", None),
            (r"([aeo]l)ves$", "${1}f", None),
            (r"([^d]ea)ves$", "${1}f", None),
            (r"(ar)ves$", "${1}f", None),
            (r"([nlw]i)ves$", "${1}fe", None),
            (r"([aeiou]y)s$", "${1}", None),
            (r"([^aeiou])ies$", "${1}y", None),
            (r"(la)ses$", "${1}s", None),
            (r"(.)s$", "${1}", None),
            (r"(.)$", "${1}", None),
        ])
    }

    /// Derive the rule that maps `from` to `to` exactly
    ///
    /// The first character is captured so the caller's capitalization of it
    /// survives, and the rest of both words is taken literally.
    pub fn exact_pair(from: &str, to: &str) -> Result<Rule> {
        let mut from_chars = from.chars();
        let first = from_chars.next().ok_or_else(|| GrammarError::Configuration {
            message: "The word to inflect from may not be empty".to_string(),
        })?;

        let mut to_chars = to.chars();
        to_chars.next().ok_or_else(|| GrammarError::Configuration {
            message: "The word to inflect to may not be empty".to_string(),
        })?;

        let pattern = format!(
            "^({}){}$",
            regex::escape(&first.to_string()),
            regex::escape(from_chars.as_str())
        );
        let replacement = format!("${{1}}{}", to_chars.as_str().replace('$', "$$"));
        Rule::new(&pattern, &replacement)
    }
}

fn build_table(rules: &[(&str, &str, Option<&str>)]) -> RuleTable {
    let mut table = RuleTable::new();
    for (pattern, replacement, unless) in rules {
        // Built-in patterns are literals; a failure here is a programming error
        let rule = Rule::new(pattern, replacement)
            .and_then(|rule| match unless {
                Some(exception) => rule.unless(exception),
                None => Ok(rule),
            })
            .unwrap_or_else(|e| panic!("built-in inflection rule is invalid: {}", e));
        table.push(rule);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plural(word: &str) -> String {
        RuleTable::singular_to_plural().apply(word).unwrap().1
    }

    fn singular(word: &str) -> String {
        RuleTable::plural_to_singular().apply(word).unwrap().1
    }

    #[test]
    fn test_first_match_wins() {
        let mut table = RuleTable::new();
        table.push(Rule::new(r"(.)$", "${1}s").unwrap());
        table.push(Rule::new(r"(x)$", "${1}es").unwrap());
        assert_eq!(table.apply("box"), Some((0, "boxs".to_string())));
    }

    #[test]
    fn test_prepend_takes_precedence() {
        let mut table = RuleTable::singular_to_plural();
        let before = table.len();
        table.prepend(RuleTable::exact_pair("octopus", "octopi").unwrap());
        assert_eq!(table.len(), before + 1);
        assert_eq!(table.apply("octopus"), Some((0, "octopi".to_string())));
    }

    #[test]
    fn test_plural_table() {
        assert_eq!(plural("mouse"), "mice");
        assert_eq!(plural("child"), "children");
        assert_eq!(plural("photo"), "photos");
        assert_eq!(plural("potato"), "potatoes");
        assert_eq!(plural("quiz"), "quizzes");
        assert_eq!(plural("bus"), "buses");
        assert_eq!(plural("box"), "boxes");
        assert_eq!(plural("church"), "churches");
        assert_eq!(plural("class"), "classes");
        assert_eq!(plural("wolf"), "wolves");
        assert_eq!(plural("leaf"), "leaves");
        assert_eq!(plural("knife"), "knives");
        assert_eq!(plural("day"), "days");
        assert_eq!(plural("category"), "categories");
        assert_eq!(plural("gas"), "gases");
        assert_eq!(plural("news"), "news");
        assert_eq!(plural("user"), "users");
    }

    #[test]
    fn test_singular_table() {
        assert_eq!(singular("mice"), "mouse");
        assert_eq!(singular("children"), "child");
        assert_eq!(singular("quizzes"), "quiz");
        assert_eq!(singular("potatoes"), "potato");
        assert_eq!(singular("shoes"), "shoe");
        assert_eq!(singular("buses"), "bus");
        assert_eq!(singular("houses"), "house");
        assert_eq!(singular("boxes"), "box");
        assert_eq!(singular("churches"), "church");
        assert_eq!(singular("classes"), "class");
        assert_eq!(singular("wolves"), "wolf");
        assert_eq!(singular("knives"), "knife");
        assert_eq!(singular("days"), "day");
        assert_eq!(singular("categories"), "category");
        assert_eq!(singular("users"), "user");
        assert_eq!(singular("deer"), "deer");
    }

    #[test]
    fn test_slices_is_not_treated_as_mice() {
        assert_eq!(singular("slices"), "slice");
    }

    #[test]
    fn test_shoes_exception_covers_compounds() {
        assert_eq!(singular("snowshoes"), "snowshoe");
        assert_eq!(singular("horseshoes"), "horseshoe");
        assert_eq!(singular("Shoes"), "Shoe");
        assert_eq!(singular("heroes"), "hero");
    }

    #[test]
    fn test_case_is_preserved() {
        assert_eq!(plural("Mouse"), "Mice");
        assert_eq!(plural("Child"), "Children");
        assert_eq!(plural("BOX"), "BOXES");
        assert_eq!(singular("People"), "Person");
        assert_eq!(singular("CATEGORIES"), "CATEGORY");
    }

    #[test]
    fn test_tables_end_with_catch_all() {
        let plural = RuleTable::singular_to_plural();
        let last = plural.iter().last().unwrap();
        assert_eq!((last.pattern(), last.replacement()), ("(.)$", "${1}s"));

        let singular = RuleTable::plural_to_singular();
        let last = singular.iter().last().unwrap();
        assert_eq!((last.pattern(), last.replacement()), ("(.)$", "${1}"));
    }

    #[test]
    fn test_empty_word_matches_nothing() {
        assert!(RuleTable::singular_to_plural().apply("").is_none());
    }

    #[test]
    fn test_exact_pair_escapes_literals() {
        let rule = RuleTable::exact_pair("c++", "c$$").unwrap();
        assert_eq!(rule.apply("c++"), Some("c$$".to_string()));
        assert_eq!(rule.apply("cpp"), None);
    }

    #[test]
    fn test_exact_pair_rejects_empty() {
        assert!(RuleTable::exact_pair("", "x").unwrap_err().is_configuration());
        assert!(RuleTable::exact_pair("x", "").unwrap_err().is_configuration());
    }

    #[test]
    fn test_invalid_pattern_is_configuration_error() {
        assert!(Rule::new("(unclosed", "x").unwrap_err().is_configuration());
    }
}
