//! Canonical provider props used across the test suites.
//!
//! `context_props` plays the ancestor, `prop_props` the child. They overlap
//! on some events and keys and differ on others, so one merge exercises
//! every precedence rule.

use serde_json::json;
use track_core::{ProviderProps, TrackingBundle};

/// Child-side props.
pub fn prop_props() -> ProviderProps {
    serde_json::from_value(json!({
        "eventFields": {
            "datepicker.close": { "who": "you" },
            "datepicker.open": { "who": "you" },
            "datepicker.blur": { "when": "today" }
        },
        "eventOptions": {
            "datepicker.close": { "doitnow": "yes" },
            "datepicker.open": { "doitnow": "yes" },
            "datepicker.perf": { "pain": "always" }
        },
        "eventSchema": {
            "datepicker.close": { "schema_name": "test" },
            "datepicker.open": { "schema_name": "test" },
            "datepicker.perf": { "version": 1 }
        },
        "fields": {
            "location": "top",
            "action": "test",
            "language": "english"
        },
        "options": {
            "delay": "100",
            "jump": "yolo"
        },
        "schema": {
            "schema_name": "foo",
            "version": 100
        }
    }))
    .unwrap()
}

/// Ancestor-side props.
pub fn context_props() -> ProviderProps {
    serde_json::from_value(json!({
        "eventFields": {
            "datepicker.close": { "who": "me" },
            "datepicker.open": { "who": "me" },
            "generic.click": { "dummy": "ohyeah" }
        },
        "eventOptions": {
            "datepicker.close": { "doitnow": "no" },
            "datepicker.open": { "doitnow": "no" },
            "generic.event": { "waitforever": "sure" }
        },
        "eventSchema": {
            "datepicker.close": { "schema_name": "another", "version": 2 }
        },
        "fields": {
            "location": "bottom",
            "action": "failure",
            "zombie": "walking"
        },
        "options": {
            "delay": "404",
            "up": "down"
        },
        "schema": {
            "schema_name": "test",
            "version": 1
        }
    }))
    .unwrap()
}

/// The child bundle on its own.
pub fn prop_bundle() -> TrackingBundle {
    prop_props().local_bundle().unwrap()
}

/// The ancestor bundle on its own.
pub fn context_bundle() -> TrackingBundle {
    context_props().local_bundle().unwrap()
}

/// The expected result of merging [`prop_bundle`] over [`context_bundle`].
pub fn merged_bundle() -> TrackingBundle {
    serde_json::from_value(json!({
        "event_fields": {
            "datepicker.close": { "who": "you" },
            "datepicker.open": { "who": "you" },
            "datepicker.blur": { "when": "today" },
            "generic.click": { "dummy": "ohyeah" }
        },
        "event_options": {
            "datepicker.close": { "doitnow": "yes" },
            "datepicker.open": { "doitnow": "yes" },
            "datepicker.perf": { "pain": "always" },
            "generic.event": { "waitforever": "sure" }
        },
        "event_schema": {
            "datepicker.close": { "schema_name": "test", "version": 2 },
            "datepicker.open": { "schema_name": "test" },
            "datepicker.perf": { "version": 1 }
        },
        "fields": {
            "location": "top",
            "action": "test",
            "language": "english",
            "zombie": "walking"
        },
        "options": {
            "delay": "100",
            "jump": "yolo",
            "up": "down"
        },
        "schema": {
            "schema_name": "foo",
            "version": 100
        }
    }))
    .unwrap()
}
