//! # This-Grammar
//!
//! English noun inflection and identifier notation conversion for the this-rs framework.
//!
//! ## Features
//!
//! - **Notation Conversion**: `underscore_notation` ⇄ `camelCase` ⇄ human-friendly text
//! - **Inflection**: ordered, first-match-wins rules (mouse → mice, company → companies)
//! - **Compound Identifiers**: only the final word is inflected (`MyFooBox` → `MyFooBoxes`)
//! - **Custom Rules**: exact overrides that always beat the built-in rules
//! - **Quantity Phrasing**: `"%d files"` with optional spelled-out digits
//! - **List Joining**: `a, b and c` with a replaceable formatter
//! - **Configuration-Based**: load custom rules from YAML or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use grammar::prelude::*;
//!
//! let grammar = Grammar::new();
//!
//! assert_eq!(grammar.pluralize("blog_category")?, "blog_categories");
//! assert_eq!(grammar.singularize("People")?, "Person");
//! assert_eq!(grammar.humanize("user_id"), "User ID");
//! assert_eq!(
//!     grammar.inflect_on_quantity(0, "item", Some("items (%d)"), true)?,
//!     "items (zero)"
//! );
//! assert_eq!(grammar.join_array(&["a", "b", "c"], "and")?, "a, b and c");
//! # Ok::<(), GrammarError>(())
//! ```

pub mod config;
pub mod core;
pub mod grammar;

pub use crate::core::error::{GrammarError, Result};
pub use crate::grammar::{global, Grammar};

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        compose::{Composer, PositionalComposer},
        error::{Direction, GrammarError},
        join::JoinType,
        quantity::Countable,
    };

    // === Grammar ===
    pub use crate::grammar::{global, Grammar};

    // === Config ===
    pub use crate::config::{CamelUnderscoreRule, GrammarConfig, HumanizeRule, SingularPluralRule};
}
