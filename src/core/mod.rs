//! Core module containing the rule engine and the services built on it

pub mod compose;
pub mod error;
pub mod inflect;
pub mod join;
pub mod notation;
pub mod quantity;
pub mod rules;

pub use compose::{Composer, PositionalComposer};
pub use error::{Direction, GrammarError, Result};
pub use inflect::split_last_word;
pub use join::{JoinArrayCallback, JoinType};
pub use notation::NotationRules;
pub use quantity::Countable;
pub use rules::{Rule, RuleTable};
