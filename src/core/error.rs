//! Typed error handling for the grammar module
//!
//! Every fallible operation returns [`GrammarError`] so callers can match on
//! the category instead of parsing messages.
//!
//! # Error Categories
//!
//! - [`GrammarError::Inflection`]: no rule matched while pluralizing or singularizing
//! - [`GrammarError::InvalidArgument`]: a caller passed a value outside the accepted set
//! - [`GrammarError::Configuration`]: a custom rule could not be registered
//!
//! # Example
//!
//! ```rust
//! use grammar::prelude::*;
//!
//! let grammar = Grammar::new();
//! match grammar.join_array(&["a", "b"], "nor") {
//!     Err(GrammarError::InvalidArgument { message }) => {
//!         assert!(message.contains("nor"));
//!     }
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```

use std::fmt;

/// Direction of an inflection, reported in [`GrammarError::Inflection`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Singular to plural
    Pluralize,
    /// Plural to singular
    Singularize,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Pluralize => write!(f, "pluralize"),
            Direction::Singularize => write!(f, "singularize"),
        }
    }
}

/// The main error type for the grammar module
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    /// No rule in the table matched the final word
    #[error("{message}")]
    Inflection {
        word: String,
        direction: Direction,
        message: String,
    },

    /// An argument was outside the accepted set of values
    #[error("{message}")]
    InvalidArgument { message: String },

    /// A custom rule was malformed
    #[error("{message}")]
    Configuration { message: String },
}

impl GrammarError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            GrammarError::Inflection { .. } => "INFLECTION_ERROR",
            GrammarError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            GrammarError::Configuration { .. } => "CONFIGURATION_ERROR",
        }
    }

    pub fn is_inflection(&self) -> bool {
        matches!(self, GrammarError::Inflection { .. })
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, GrammarError::InvalidArgument { .. })
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, GrammarError::Configuration { .. })
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, GrammarError>;
