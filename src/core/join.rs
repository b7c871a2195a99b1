//! Joining terms into an English list with a final conjunction

use crate::core::compose::Composer;
use crate::core::error::{GrammarError, Result};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Replacement formatter for [`Grammar::join_array`](crate::Grammar::join_array)
pub type JoinArrayCallback = Arc<dyn Fn(&[&str], JoinType) -> String + Send + Sync>;

/// The conjunction placed before the last term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    And,
    Or,
}

impl JoinType {
    pub const VALID: [&'static str; 2] = ["and", "or"];

    pub fn as_str(&self) -> &'static str {
        match self {
            JoinType::And => "and",
            JoinType::Or => "or",
        }
    }

    /// Parse a join type, composing the error message with `composer`
    pub fn parse_with(value: &str, composer: &dyn Composer) -> Result<Self> {
        match value {
            "and" => Ok(JoinType::And),
            "or" => Ok(JoinType::Or),
            other => Err(GrammarError::InvalidArgument {
                message: composer.compose(
                    "The type specified, %1$s, is invalid. Must be one of: %2$s.",
                    &[other, &Self::VALID.join(", ")],
                ),
            }),
        }
    }
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for JoinType {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_with(s, &crate::core::compose::PositionalComposer)
    }
}

/// Join terms as `a, b and c`, without a serial comma
pub fn join_terms(terms: &[&str], join_type: JoinType) -> String {
    match terms {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{} {} {}", first, join_type, second),
        [init @ .., last] => format!("{} {} {}", init.join(", "), join_type, last),
    }
}
