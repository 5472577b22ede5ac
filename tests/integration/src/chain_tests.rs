//! End-to-end tests for provider chains loaded from fixture files
//!
//! Exercises the complete flow: chain file -> composed contexts -> button
//! click -> delivered JSON line.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use track_core::{FieldMap, ProviderChain};
use track_harness::{Delivery, EventButton, json_line_trigger};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/chains")
        .join(name)
}

fn map(pairs: &[(&str, &str)]) -> FieldMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Fire `event` through the innermost context of `chain` and return what
/// was delivered.
fn fire(chain: &ProviderChain, event: &str) -> Vec<Delivery> {
    let buffer = Arc::new(Mutex::new(Vec::<u8>::new()));
    let context = chain.compose(Some(json_line_trigger(Arc::clone(&buffer))));

    EventButton::new(event).click(&context).unwrap();

    let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
    output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_datepicker_chain_delivers_merged_payload() {
    let chain = ProviderChain::load(fixture("datepicker.toml")).unwrap();
    assert_eq!(chain.len(), 3);

    let delivered = fire(&chain, "datepicker.close");

    assert_eq!(
        delivered,
        vec![Delivery {
            event: "datepicker.close".to_string(),
            fields: map(&[
                ("action", "test"),
                ("language", "english"),
                ("location", "top"),
                ("who", "you"),
                ("zombie", "walking"),
            ]),
            options: map(&[
                ("delay", "100"),
                ("doitnow", "yes"),
                ("jump", "yolo"),
                ("up", "down"),
            ]),
        }]
    );
}

#[test]
fn test_datepicker_chain_keeps_outer_only_events() {
    let chain = ProviderChain::load(fixture("datepicker.toml")).unwrap();

    let delivered = fire(&chain, "generic.click");

    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].fields["dummy"], "ohyeah");
    assert_eq!(delivered[0].fields["location"], "top");
}

#[test]
fn test_datepicker_chain_resolves_event_schema() {
    let chain = ProviderChain::load(fixture("datepicker.toml")).unwrap();
    let context = chain.compose(None);

    let schema = context.data.resolved_schema("datepicker.close");
    assert_eq!(schema["schema_name"], "datepicker");
    assert_eq!(schema["version"], 2);

    let schema = context.data.resolved_schema("datepicker.blur");
    assert_eq!(schema["schema_name"], "test");
    assert_eq!(schema["version"], 1);
}

#[test]
fn test_contexts_build_up_level_by_level() {
    let chain = ProviderChain::load(fixture("datepicker.toml")).unwrap();
    let contexts = chain.contexts(None);

    assert_eq!(contexts.len(), 3);
    assert!(contexts.iter().all(|ctx| ctx.has_provider));
    assert_eq!(contexts[0].data.fields["location"], "bottom");
    assert_eq!(contexts[1].data.fields["location"], "top");
    assert!(contexts[1].data.event_options.get("datepicker.close").is_none());
    assert_eq!(contexts[2].data.event_options["datepicker.close"]["doitnow"], "yes");
}

#[test]
fn test_overwrite_in_json_chain_isolates_subtree() {
    let chain = ProviderChain::load(fixture("reset.json")).unwrap();
    let context = chain.compose(None);

    assert_eq!(context.data.fields, map(&[("leaf", "yes"), ("section", "isolated")]));
    assert!(context.data.event_fields.is_empty());

    // The overwrite also dropped the delivery trigger supplied at the root.
    assert!(fire(&chain, "generic.click").is_empty());
}
