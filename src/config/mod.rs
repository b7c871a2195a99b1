//! Configuration loading for custom grammar rules
//!
//! Applications usually know their irregular nouns and acronyms up front.
//! Listing them in YAML keeps them next to the rest of the configuration:
//!
//! ```yaml
//! singular_plural:
//!   - singular: octopus
//!     plural: octopi
//! camel_underscore:
//!   - camel: htmlParser
//!     underscore: html_parser
//! humanize:
//!   - input: fs_path
//!     output: File System Path
//! ```

use crate::core::error::GrammarError;
use crate::core::rules::RuleTable;
use crate::grammar::Grammar;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// An exact singular/plural pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingularPluralRule {
    /// Singular form (e.g., "octopus")
    pub singular: String,

    /// Plural form (e.g., "octopi")
    pub plural: String,
}

/// A `camelCase` ⇄ `underscore_notation` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CamelUnderscoreRule {
    pub camel: String,
    pub underscore: String,
}

/// A fixed result for `humanize`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanizeRule {
    pub input: String,
    pub output: String,
}

/// Complete set of custom grammar rules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarConfig {
    #[serde(default)]
    pub singular_plural: Vec<SingularPluralRule>,

    #[serde(default)]
    pub camel_underscore: Vec<CamelUnderscoreRule>,

    #[serde(default)]
    pub humanize: Vec<HumanizeRule>,
}

impl GrammarConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Merge several configurations, keeping their order
    ///
    /// Rules from later configurations are registered later, so they win
    /// over earlier ones for the same word.
    pub fn merge(configs: Vec<GrammarConfig>) -> Self {
        let mut merged = GrammarConfig::default();
        for config in configs {
            merged.singular_plural.extend(config.singular_plural);
            merged.camel_underscore.extend(config.camel_underscore);
            merged.humanize.extend(config.humanize);
        }
        merged
    }

    pub fn is_empty(&self) -> bool {
        self.singular_plural.is_empty() && self.camel_underscore.is_empty() && self.humanize.is_empty()
    }

    /// Check every rule without touching a grammar
    ///
    /// Empty operands and forms that cannot be turned into inflection rules
    /// are reported as [`GrammarError::Configuration`].
    pub fn validate(&self) -> Result<()> {
        for rule in &self.singular_plural {
            if rule.singular.is_empty() || rule.plural.is_empty() {
                return Err(GrammarError::Configuration {
                    message: format!(
                        "The singular ({}) and plural ({}) forms may not be empty",
                        rule.singular, rule.plural
                    ),
                }
                .into());
            }
            RuleTable::exact_pair(&rule.singular, &rule.plural)?;
            RuleTable::exact_pair(&rule.plural, &rule.singular)?;
        }
        for rule in &self.camel_underscore {
            if rule.camel.is_empty() || rule.underscore.is_empty() {
                return Err(GrammarError::Configuration {
                    message: format!(
                        "The camelCase ({}) and underscore_notation ({}) forms may not be empty",
                        rule.camel, rule.underscore
                    ),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Register every rule on `grammar`
    ///
    /// The whole configuration is validated first, so a failed apply leaves
    /// `grammar` as it was.
    pub fn apply(&self, grammar: &Grammar) -> Result<()> {
        self.validate()?;

        for rule in &self.singular_plural {
            grammar.add_singular_plural_rule(&rule.singular, &rule.plural)?;
        }
        for rule in &self.camel_underscore {
            grammar.add_camel_underscore_rule(&rule.camel, &rule.underscore)?;
        }
        for rule in &self.humanize {
            grammar.add_humanize_rule(&rule.input, &rule.output);
        }

        tracing::debug!(
            singular_plural = self.singular_plural.len(),
            camel_underscore = self.camel_underscore.len(),
            humanize = self.humanize.len(),
            "applied grammar configuration"
        );
        Ok(())
    }
}

impl Grammar {
    /// Create a grammar with the built-in rules plus `config`
    pub fn from_config(config: &GrammarConfig) -> Result<Self> {
        let grammar = Grammar::new();
        config.apply(&grammar)?;
        Ok(grammar)
    }
}
