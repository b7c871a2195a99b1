//! Integration tests for loading and merging grammar configuration

use grammar::prelude::*;
use std::io::Write;

#[test]
fn test_merge_empty_configs() {
    let merged = GrammarConfig::merge(vec![]);

    assert!(merged.is_empty());
}

#[test]
fn test_merge_keeps_order() {
    let config1_yaml = r#"
singular_plural:
  - singular: cactus
    plural: cactuses
humanize:
  - input: dob
    output: Date Of Birth
"#;

    let config2_yaml = r#"
singular_plural:
  - singular: cactus
    plural: cacti
camel_underscore:
  - camel: HTTPServer
    underscore: http_server
"#;

    let config1 = GrammarConfig::from_yaml_str(config1_yaml).unwrap();
    let config2 = GrammarConfig::from_yaml_str(config2_yaml).unwrap();

    let merged = GrammarConfig::merge(vec![config1, config2]);

    assert_eq!(merged.singular_plural.len(), 2);
    assert_eq!(merged.singular_plural[1].plural, "cacti");
    assert_eq!(merged.camel_underscore.len(), 1);
    assert_eq!(merged.humanize.len(), 1);

    // The later config registers last, so its pair wins
    let grammar = Grammar::from_config(&merged).unwrap();
    assert_eq!(grammar.pluralize("cactus").unwrap(), "cacti");
    assert_eq!(grammar.singularize("cactuses").unwrap(), "cactus");
    assert_eq!(grammar.underscorize("HTTPServer"), "http_server");
    assert_eq!(grammar.humanize("dob"), "Date Of Birth");
}

#[test]
fn test_from_json_str() {
    let json = r#"{
        "singular_plural": [{ "singular": "alumnus", "plural": "alumni" }],
        "humanize": [{ "input": "sku", "output": "SKU" }]
    }"#;

    let config = GrammarConfig::from_json_str(json).unwrap();
    let grammar = Grammar::from_config(&config).unwrap();

    assert_eq!(grammar.pluralize("alumnus").unwrap(), "alumni");
    assert_eq!(grammar.humanize("sku"), "SKU");
}

#[test]
fn test_from_yaml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "singular_plural:\n  - singular: criterion\n    plural: criteria"
    )
    .unwrap();

    let config = GrammarConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();
    let grammar = Grammar::from_config(&config).unwrap();

    assert_eq!(grammar.pluralize("criterion").unwrap(), "criteria");
    assert_eq!(grammar.singularize("Criteria").unwrap(), "Criterion");
}

#[test]
fn test_missing_file_is_an_error() {
    assert!(GrammarConfig::from_yaml_file("/nonexistent/grammar.yaml").is_err());
}

#[test]
fn test_invalid_yaml_is_an_error() {
    assert!(GrammarConfig::from_yaml_str("singular_plural: [unclosed").is_err());
}

#[test]
fn test_apply_to_existing_grammar() {
    let grammar = Grammar::new();
    let config = GrammarConfig {
        camel_underscore: vec![CamelUnderscoreRule {
            camel: "iOSDevice".to_string(),
            underscore: "ios_device".to_string(),
        }],
        ..Default::default()
    };

    config.apply(&grammar).unwrap();

    assert_eq!(grammar.camelize("ios_device", false), "iOSDevice");
    assert_eq!(grammar.underscorize("iOSDevice"), "ios_device");
}

#[test]
fn test_empty_rule_fails_to_apply() {
    let grammar = Grammar::new();
    let config = GrammarConfig {
        singular_plural: vec![SingularPluralRule {
            singular: "sheep".to_string(),
            plural: "".to_string(),
        }],
        ..Default::default()
    };

    let err = config.apply(&grammar).unwrap_err();
    let grammar_err = err.downcast_ref::<GrammarError>().unwrap();
    assert!(grammar_err.is_configuration());
}

#[test]
fn test_failed_apply_leaves_grammar_untouched() {
    let grammar = Grammar::new();
    let config = GrammarConfig {
        singular_plural: vec![
            SingularPluralRule {
                singular: "octopus".to_string(),
                plural: "octopi".to_string(),
            },
            SingularPluralRule {
                singular: "".to_string(),
                plural: "x".to_string(),
            },
        ],
        humanize: vec![HumanizeRule {
            input: "fs_path".to_string(),
            output: "File System Path".to_string(),
        }],
        ..Default::default()
    };

    assert!(config.apply(&grammar).is_err());
    assert!(!grammar.is_customized());
    assert_eq!(grammar.pluralize("octopus").unwrap(), "octopuses");
    assert_eq!(grammar.humanize("fs_path"), "Fs Path");
}
