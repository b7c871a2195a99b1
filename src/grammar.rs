//! The [`Grammar`] object tying the rule tables, override tables and
//! services together behind one lock

use crate::core::compose::{Composer, PositionalComposer};
use crate::core::error::{Direction, GrammarError, Result};
use crate::core::inflect;
use crate::core::join::{join_terms, JoinArrayCallback, JoinType};
use crate::core::notation::{self, NotationRules};
use crate::core::quantity::{phrase, Countable};
use crate::core::rules::RuleTable;
use std::fmt;
use std::sync::{Arc, OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Every piece of mutable configuration
#[derive(Clone)]
struct GrammarState {
    singular_to_plural: RuleTable,
    plural_to_singular: RuleTable,
    notation: NotationRules,
    join_array_callback: Option<JoinArrayCallback>,
}

impl Default for GrammarState {
    fn default() -> Self {
        Self {
            singular_to_plural: RuleTable::singular_to_plural(),
            plural_to_singular: RuleTable::plural_to_singular(),
            notation: NotationRules::new(),
            join_array_callback: None,
        }
    }
}

/// English inflection and notation conversion with registrable custom rules
///
/// All operations take `&self`. Conversions share a read lock; registration
/// and [`reset`](Grammar::reset) take the write lock, so a `Grammar` can be
/// shared across threads behind an `Arc`.
///
/// # Examples
///
/// ```
/// use grammar::Grammar;
///
/// let grammar = Grammar::new();
/// assert_eq!(grammar.pluralize("mouse").unwrap(), "mice");
/// assert_eq!(grammar.singularize("children").unwrap(), "child");
/// assert_eq!(grammar.underscorize("myFooBar"), "my_foo_bar");
/// assert_eq!(grammar.camelize("my_foo_bar", true), "MyFooBar");
/// assert_eq!(grammar.humanize("my_html_page"), "My HTML Page");
///
/// grammar.add_singular_plural_rule("octopus", "octopi").unwrap();
/// assert_eq!(grammar.pluralize("octopus").unwrap(), "octopi");
/// ```
pub struct Grammar {
    state: RwLock<GrammarState>,
    composer: Arc<dyn Composer>,
}

impl Grammar {
    /// Create a grammar with the built-in rules and the positional composer
    pub fn new() -> Self {
        Self::with_composer(Arc::new(PositionalComposer))
    }

    /// Create a grammar whose user-facing text goes through `composer`
    pub fn with_composer(composer: Arc<dyn Composer>) -> Self {
        Self {
            state: RwLock::new(GrammarState::default()),
            composer,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, GrammarState> {
        // The state is replaced wholesale or appended to, never left half-written
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, GrammarState> {
        self.state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn composer(&self) -> &dyn Composer {
        self.composer.as_ref()
    }

    // === Notation ===

    /// Convert to `camelCase`, or `UpperCamelCase` when `upper` is set
    pub fn camelize(&self, input: &str, upper: bool) -> String {
        notation::camelize(&self.read().notation, input, upper)
    }

    /// Convert to `underscore_notation`
    pub fn underscorize(&self, input: &str) -> String {
        notation::underscorize(&self.read().notation, input)
    }

    /// Convert to capitalized, space-separated text
    pub fn humanize(&self, input: &str) -> String {
        notation::humanize(&self.read().notation, input)
    }

    /// Register a custom `camelCase` ⇄ `underscore_notation` pair
    pub fn add_camel_underscore_rule(&self, camel: &str, underscore: &str) -> Result<()> {
        if camel.is_empty() || underscore.is_empty() {
            return Err(GrammarError::Configuration {
                message: self.composer.compose(
                    "The camelCase (%1$s) and underscore_notation (%2$s) forms may not be empty",
                    &[camel, underscore],
                ),
            });
        }

        tracing::debug!(camel = %camel, underscore = %underscore, "registering camel/underscore rule");
        self.write().notation.add_camel_underscore(camel, underscore);
        Ok(())
    }

    /// Register a custom result for [`humanize`](Grammar::humanize)
    pub fn add_humanize_rule(&self, input: &str, humanized: &str) {
        tracing::debug!(input = %input, humanized = %humanized, "registering humanize rule");
        self.write().notation.add_humanize(input, humanized);
    }

    // === Inflection ===

    /// Pluralize the final word of `word`
    pub fn pluralize(&self, word: &str) -> Result<String> {
        let state = self.read();
        inflect::inflect(
            &state.singular_to_plural,
            &state.notation,
            self.composer(),
            word,
            Direction::Pluralize,
        )
    }

    /// Singularize the final word of `word`
    pub fn singularize(&self, word: &str) -> Result<String> {
        let state = self.read();
        inflect::inflect(
            &state.plural_to_singular,
            &state.notation,
            self.composer(),
            word,
            Direction::Singularize,
        )
    }

    /// Register an exact singular/plural pair ahead of every existing rule
    ///
    /// Both directions are updated, and nothing is ever removed.
    pub fn add_singular_plural_rule(&self, singular: &str, plural: &str) -> Result<()> {
        if singular.is_empty() || plural.is_empty() {
            return Err(GrammarError::Configuration {
                message: self.composer.compose(
                    "The singular (%1$s) and plural (%2$s) forms may not be empty",
                    &[singular, plural],
                ),
            });
        }

        let to_plural = RuleTable::exact_pair(singular, plural)?;
        let to_singular = RuleTable::exact_pair(plural, singular)?;

        tracing::debug!(singular = %singular, plural = %plural, "registering singular/plural rule");
        let mut state = self.write();
        state.singular_to_plural.prepend(to_plural);
        state.plural_to_singular.prepend(to_singular);
        Ok(())
    }

    pub fn plural_rule_count(&self) -> usize {
        self.read().singular_to_plural.len()
    }

    pub fn singular_rule_count(&self) -> usize {
        self.read().plural_to_singular.len()
    }

    // === Quantity ===

    /// Return `singular` for a quantity of one, otherwise the plural form
    ///
    /// The plural defaults to [`pluralize`](Grammar::pluralize)`(singular)`.
    /// A `%d` in the plural form is replaced by the quantity, spelled out for
    /// zero to nine when `use_words` is set.
    ///
    /// ```
    /// use grammar::Grammar;
    ///
    /// let grammar = Grammar::new();
    /// assert_eq!(grammar.inflect_on_quantity(1, "file", None, false).unwrap(), "file");
    /// assert_eq!(grammar.inflect_on_quantity(3, "file", None, false).unwrap(), "files");
    /// assert_eq!(
    ///     grammar.inflect_on_quantity(&["a", "b"], "file", Some("%d files"), true).unwrap(),
    ///     "two files"
    /// );
    /// ```
    pub fn inflect_on_quantity<Q: Countable>(
        &self,
        quantity: Q,
        singular: &str,
        plural: Option<&str>,
        use_words: bool,
    ) -> Result<String> {
        let quantity = quantity.quantity();
        let plural = match plural {
            Some(plural) => plural.to_string(),
            None if quantity == 1 => return Ok(singular.to_string()),
            None => self.pluralize(singular)?,
        };

        Ok(phrase(self.composer(), quantity, singular, &plural, use_words))
    }

    // === Join Array ===

    /// Join terms into a list ending in `and` or `or`
    ///
    /// Fails with [`GrammarError::InvalidArgument`] for any other type, even
    /// when a replacement callback is registered.
    pub fn join_array<S: AsRef<str>>(&self, terms: &[S], join_type: &str) -> Result<String> {
        let join_type = JoinType::parse_with(join_type, self.composer())?;
        Ok(self.join_array_typed(terms, join_type))
    }

    /// Join terms with an already-parsed [`JoinType`]
    pub fn join_array_typed<S: AsRef<str>>(&self, terms: &[S], join_type: JoinType) -> String {
        let terms: Vec<&str> = terms.iter().map(|term| term.as_ref()).collect();

        // Clone the callback out so user code never runs under the lock
        let callback = self.read().join_array_callback.clone();
        match callback {
            Some(callback) => callback(terms.as_slice(), join_type),
            None => join_terms(&terms, join_type),
        }
    }

    /// Replace the built-in list formatter
    pub fn register_join_array_callback<F>(&self, callback: F)
    where
        F: Fn(&[&str], JoinType) -> String + Send + Sync + 'static,
    {
        tracing::debug!("registering join array callback");
        self.write().join_array_callback = Some(Arc::new(callback));
    }

    // === Lifecycle ===

    /// Restore built-in tables and drop every custom rule and callback
    pub fn reset(&self) {
        tracing::debug!("resetting grammar rules");
        *self.write() = GrammarState::default();
    }

    /// Whether any custom rule or callback is registered
    pub fn is_customized(&self) -> bool {
        let state = self.read();
        let defaults = GrammarState::default();
        !state.notation.is_empty()
            || state.join_array_callback.is_some()
            || state.singular_to_plural.len() != defaults.singular_to_plural.len()
            || state.plural_to_singular.len() != defaults.plural_to_singular.len()
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Grammar {
    /// Snapshot the current rules into an independent grammar
    fn clone(&self) -> Self {
        Self {
            state: RwLock::new(self.read().clone()),
            composer: Arc::clone(&self.composer),
        }
    }
}

impl fmt::Debug for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read();
        f.debug_struct("Grammar")
            .field("singular_to_plural", &state.singular_to_plural.len())
            .field("plural_to_singular", &state.plural_to_singular.len())
            .field("notation", &state.notation)
            .field("join_array_callback", &state.join_array_callback.is_some())
            .finish()
    }
}

/// The process-wide grammar, created with built-in rules on first use
pub fn global() -> &'static Grammar {
    static GLOBAL: OnceLock<Grammar> = OnceLock::new();
    GLOBAL.get_or_init(Grammar::new)
}
