//! Conversion between `underscore_notation`, `camelCase` and human-friendly text
//!
//! Each conversion consults an exact-match override table first, then falls
//! back to the generic algorithm.
//!
//! Runs of capitals are not merged into one token: `HTTPServer` underscorizes
//! to `h_t_t_p_server`. Register a camel/underscore rule for acronyms that
//! need a nicer form.
//!
//! Override tables are `IndexMap`s: lookups are exact, but iteration and
//! `Debug` output follow registration order.

use indexmap::IndexMap;
use regex::Regex;
use std::sync::OnceLock;

/// Words that [`humanize`] writes fully upper-case
pub const HUMANIZE_ACRONYMS: &[&str] = &[
    "api", "css", "gif", "html", "id", "jpg", "js", "mp3", "pdf", "php", "png", "sql", "swf",
    "url", "xhtml", "xml",
];

/// Exact-match override tables for the notation conversions
#[derive(Debug, Clone, Default)]
pub struct NotationRules {
    /// `underscore_notation` → lower `camelCase`
    camelize: IndexMap<String, String>,
    /// lower `camelCase` → `underscore_notation`
    underscorize: IndexMap<String, String>,
    /// any notation → human-friendly text
    humanize: IndexMap<String, String>,
}

impl NotationRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a camel/underscore pair for both directions
    ///
    /// The camel form is stored with its first letter lower-cased.
    pub fn add_camel_underscore(&mut self, camel: &str, underscore: &str) {
        let camel = lower_first(camel);
        self.underscorize
            .insert(camel.clone(), underscore.to_string());
        self.camelize.insert(underscore.to_string(), camel);
    }

    pub fn add_humanize(&mut self, input: &str, humanized: &str) {
        self.humanize
            .insert(input.to_string(), humanized.to_string());
    }

    /// Registered humanize overrides as `(input, humanized)`
    pub fn humanize_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.humanize.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.camelize.is_empty() && self.underscorize.is_empty() && self.humanize.is_empty()
    }
}

/// Convert `underscore_notation`, `camelCase` or human-friendly text to `camelCase`
///
/// # Examples
///
/// ```
/// use grammar::core::notation::{camelize, NotationRules};
///
/// let rules = NotationRules::new();
/// assert_eq!(camelize(&rules, "my_foo_bar", true), "MyFooBar");
/// assert_eq!(camelize(&rules, "my_foo_bar", false), "myFooBar");
/// assert_eq!(camelize(&rules, "My foo  bar", false), "myFooBar");
/// ```
pub fn camelize(rules: &NotationRules, input: &str, upper: bool) -> String {
    if let Some(camel) = rules.camelize.get(input) {
        return set_first_case(camel, upper);
    }

    let normalized;
    let mut string = input;
    if string.contains(' ') {
        normalized = whitespace_regex().replace_all(string, "_").to_lowercase();
        string = &normalized;
    }

    if !string.contains('_') {
        return set_first_case(string, upper);
    }

    let lowered = set_first_case(&string.to_lowercase(), upper);
    underscore_letter_regex()
        .replace_all(&lowered, |caps: &regex::Captures| caps[1].to_uppercase())
        .into_owned()
}

/// Convert `camelCase` or human-friendly text to `underscore_notation`
///
/// # Examples
///
/// ```
/// use grammar::core::notation::{underscorize, NotationRules};
///
/// let rules = NotationRules::new();
/// assert_eq!(underscorize(&rules, "myFooBar"), "my_foo_bar");
/// assert_eq!(underscorize(&rules, "MyFooBar"), "my_foo_bar");
/// assert_eq!(underscorize(&rules, "page2Title"), "page_2_title");
/// ```
pub fn underscorize(rules: &NotationRules, input: &str) -> String {
    let string = lower_first(input);

    if let Some(underscore) = rules.underscorize.get(&string) {
        return underscore.clone();
    }

    if string.contains('_') {
        return string;
    }

    if string.contains(' ') {
        return whitespace_regex()
            .replace_all(&string, "_")
            .to_lowercase();
    }

    let mut current = string;
    loop {
        let step = {
            let digits_split = letter_digit_regex().replace_all(&current, "${1}_${2}");
            upper_boundary_regex()
                .replace_all(&digits_split, "${1}_${2}")
                .into_owned()
        };
        if step == current {
            break;
        }
        current = step;
    }

    current.to_lowercase()
}

/// Convert any notation to capitalized, space-separated text
///
/// # Examples
///
/// ```
/// use grammar::core::notation::{humanize, NotationRules};
///
/// let rules = NotationRules::new();
/// assert_eq!(humanize(&rules, "my_html_page"), "My HTML Page");
/// assert_eq!(humanize(&rules, "userId"), "User ID");
/// assert_eq!(humanize(&rules, "already spaced"), "already spaced");
/// ```
pub fn humanize(rules: &NotationRules, input: &str) -> String {
    if let Some(humanized) = rules.humanize.get(input) {
        return humanized.clone();
    }

    if input.contains(' ') {
        return input.to_string();
    }

    let underscored = if input.contains('_') {
        input.to_string()
    } else {
        underscorize(rules, input)
    };

    let spaced = underscored.replace('_', " ");
    humanize_regex()
        .replace_all(&spaced, |caps: &regex::Captures| caps[0].to_uppercase())
        .into_owned()
}

/// Lower-case the first character, leaving the rest untouched
pub(crate) fn lower_first(s: &str) -> String {
    set_first_case(s, false)
}

fn set_first_case(s: &str, upper: bool) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if upper => first.to_uppercase().chain(chars).collect(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn whitespace_regex() -> &'static Regex {
    static WHITESPACE_REGEX: OnceLock<Regex> = OnceLock::new();
    WHITESPACE_REGEX.get_or_init(|| Regex::new(r"\s+").unwrap())
}

fn underscore_letter_regex() -> &'static Regex {
    static UNDERSCORE_LETTER_REGEX: OnceLock<Regex> = OnceLock::new();
    UNDERSCORE_LETTER_REGEX.get_or_init(|| Regex::new(r"_([a-z0-9])").unwrap())
}

fn letter_digit_regex() -> &'static Regex {
    static LETTER_DIGIT_REGEX: OnceLock<Regex> = OnceLock::new();
    LETTER_DIGIT_REGEX.get_or_init(|| Regex::new(r"([a-zA-Z])([0-9])").unwrap())
}

fn upper_boundary_regex() -> &'static Regex {
    static UPPER_BOUNDARY_REGEX: OnceLock<Regex> = OnceLock::new();
    UPPER_BOUNDARY_REGEX.get_or_init(|| Regex::new(r"([a-z0-9A-Z])([A-Z])").unwrap())
}

fn humanize_regex() -> &'static Regex {
    static HUMANIZE_REGEX: OnceLock<Regex> = OnceLock::new();
    HUMANIZE_REGEX.get_or_init(|| {
        let pattern = format!(r"(?i:\b(?:{})\b)|\b\w", HUMANIZE_ACRONYMS.join("|"));
        Regex::new(&pattern).unwrap()
    })
}
