//! Property-based tests for identifier conversion and output determinism

use cwgen::emit::ident::{camel_case, pascal_case};
use cwgen::emit::types;
use cwgen::schema::ContractSchemas;
use proptest::prelude::*;
use std::collections::BTreeMap;

/// snake_case identifiers as they appear in contract schemas
fn snake_ident() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9]{0,8}(_[a-z][a-z0-9]{0,8}){0,3}").unwrap()
}

#[test]
fn test_case_conversion_properties() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&snake_ident(), |ident| {
            let pascal = pascal_case(&ident);
            let camel = camel_case(&ident);

            // Separators never survive conversion
            assert!(!pascal.contains('_'));
            assert!(!camel.contains('_'));

            // Casing of the first character distinguishes the two forms
            assert!(pascal.chars().next().unwrap().is_ascii_uppercase());
            assert!(camel.chars().next().unwrap().is_ascii_lowercase());

            // Both preserve every non-separator character (case aside)
            let stripped: String = ident.chars().filter(|c| *c != '_').collect();
            assert_eq!(pascal.to_ascii_lowercase(), stripped);
            assert_eq!(camel.to_ascii_lowercase(), stripped);

            // Conversion is deterministic
            assert_eq!(pascal, pascal_case(&ident));
            assert_eq!(camel, camel_case(&ident));

            Ok(())
        })
        .unwrap();
}

#[test]
fn test_pascal_then_camel_round_trips_single_segments() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&proptest::string::string_regex("[a-z][a-z0-9]{0,12}").unwrap(), |word| {
            // A single segment is unchanged by camel_case
            assert_eq!(camel_case(&word), word);
            Ok(())
        })
        .unwrap();
}

/// Emission over the same schema must be byte-identical, whatever the
/// property names are.
#[test]
fn test_types_emission_determinism() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &proptest::collection::btree_map(snake_ident(), any::<bool>(), 1..8),
            |fields| {
                let properties: serde_json::Map<String, serde_json::Value> = fields
                    .keys()
                    .map(|name| (name.clone(), serde_json::json!({"type": "string"})))
                    .collect();
                let required: Vec<&String> =
                    fields.iter().filter(|(_, req)| **req).map(|(n, _)| n).collect();
                let schema = serde_json::json!({
                    "title": "InstantiateMsg",
                    "type": "object",
                    "required": required,
                    "properties": properties
                });

                let contract = ContractSchemas {
                    name: "Wager".to_string(),
                    instantiate: Some(serde_json::from_value(schema).unwrap()),
                    execute: None,
                    query: None,
                    migrate: None,
                    responses: BTreeMap::new(),
                };

                let first = types::emit(&contract);
                let second = types::emit(&contract);
                assert_eq!(first.source, second.source);

                // Every property surfaces in the emitted interface
                for name in fields.keys() {
                    assert!(first.source.contains(name.as_str()));
                }

                Ok(())
            },
        )
        .unwrap();
}
