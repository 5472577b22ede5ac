//! Tracking configuration bundle
//!
//! A [`TrackingBundle`] is the unit of inheritable state a provider owns:
//! global default fields, options and schema, the same three keyed by event
//! name, and the downstream trigger function that actually delivers events.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TriggerError;

/// Event fields, keyed by field name.
pub type FieldMap = BTreeMap<String, String>;

/// Trigger options, keyed by option name.
pub type OptionMap = BTreeMap<String, String>;

/// Schema metadata. Values are scalars (strings, numbers, booleans).
pub type SchemaMap = BTreeMap<String, Value>;

/// A map keyed by event name whose values are themselves maps.
pub type EventMap<V> = BTreeMap<String, BTreeMap<String, V>>;

type TriggerImpl = dyn Fn(&str, &FieldMap, &OptionMap) -> Result<(), TriggerError> + Send + Sync;

/// Handle to a caller-supplied trigger function.
///
/// Cloning is cheap and keeps the same function. Two handles compare equal
/// only when they refer to the same function.
#[derive(Clone)]
pub struct TriggerFn(Arc<TriggerImpl>);

impl TriggerFn {
    /// Wrap a downstream trigger function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str, &FieldMap, &OptionMap) -> Result<(), TriggerError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// A trigger that accepts every event and does nothing.
    pub fn noop() -> Self {
        Self::new(|_, _, _| Ok(()))
    }

    /// Invoke the downstream function.
    pub fn call(
        &self,
        event: &str,
        fields: &FieldMap,
        options: &OptionMap,
    ) -> Result<(), TriggerError> {
        (self.0)(event, fields, options)
    }

    /// Whether both handles refer to the same function.
    pub fn same_as(&self, other: &TriggerFn) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for TriggerFn {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl fmt::Debug for TriggerFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TriggerFn({:p})", Arc::as_ptr(&self.0).cast::<()>())
    }
}

/// The configuration a provider resolves and hands to its descendants.
///
/// Top-level `fields`, `options` and `schema` apply to every event.
/// The `event_*` maps hold per-event overrides keyed by event name.
/// `event_schema` and `schema` are metadata only; they never reach the
/// downstream trigger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackingBundle {
    /// Default fields merged into every event
    #[serde(default)]
    pub fields: FieldMap,

    /// Default trigger options merged into every event
    #[serde(default)]
    pub options: OptionMap,

    /// Global schema metadata
    #[serde(default)]
    pub schema: SchemaMap,

    /// Per-event field overrides
    #[serde(default, alias = "eventFields")]
    pub event_fields: EventMap<String>,

    /// Per-event option overrides
    #[serde(default, alias = "eventOptions")]
    pub event_options: EventMap<String>,

    /// Per-event schema metadata
    #[serde(default, alias = "eventSchema")]
    pub event_schema: EventMap<Value>,

    /// The original downstream trigger, not the composed one
    #[serde(skip)]
    pub trigger: Option<TriggerFn>,
}

impl TrackingBundle {
    /// Create an empty bundle with no trigger.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set the downstream trigger.
    pub fn with_trigger(mut self, trigger: TriggerFn) -> Self {
        self.trigger = Some(trigger);
        self
    }

    /// Per-event fields for `event`, if any were configured.
    pub fn event_fields_for(&self, event: &str) -> Option<&FieldMap> {
        self.event_fields.get(event)
    }

    /// Per-event options for `event`, if any were configured.
    pub fn event_options_for(&self, event: &str) -> Option<&OptionMap> {
        self.event_options.get(event)
    }

    /// Per-event schema for `event`, if any was configured.
    pub fn event_schema_for(&self, event: &str) -> Option<&SchemaMap> {
        self.event_schema.get(event)
    }

    /// The schema that applies to `event`: the global schema with the
    /// event's own schema entries on top.
    pub fn resolved_schema(&self, event: &str) -> SchemaMap {
        crate::merge::merge_layers([Some(&self.schema), self.event_schema_for(event)])
    }

    /// Total number of configured entries, used for diagnostics.
    pub(crate) fn entry_count(&self) -> usize {
        self.fields.len()
            + self.options.len()
            + self.schema.len()
            + self.event_fields.len()
            + self.event_options.len()
            + self.event_schema.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_bundle_is_empty() {
        let bundle = TrackingBundle::default();
        assert!(bundle.fields.is_empty());
        assert!(bundle.event_schema.is_empty());
        assert!(bundle.trigger.is_none());
        assert_eq!(bundle.entry_count(), 0);
    }

    #[test]
    fn test_trigger_equality_is_identity() {
        let a = TriggerFn::noop();
        let b = a.clone();
        let c = TriggerFn::noop();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_deserialize_accepts_camel_case_aliases() {
        let bundle: TrackingBundle = serde_json::from_value(json!({
            "fields": { "location": "top" },
            "eventFields": { "datepicker.open": { "who": "you" } },
            "eventSchema": { "datepicker.open": { "version": 1 } }
        }))
        .unwrap();

        assert_eq!(bundle.fields["location"], "top");
        assert_eq!(bundle.event_fields_for("datepicker.open").unwrap()["who"], "you");
        assert_eq!(bundle.event_schema_for("datepicker.open").unwrap()["version"], 1);
        assert!(bundle.event_options_for("datepicker.open").is_none());
    }

    #[test]
    fn test_resolved_schema_prefers_event_entries() {
        let mut bundle = TrackingBundle::empty();
        bundle.schema.insert("schema_name".into(), json!("foo"));
        bundle.schema.insert("version".into(), json!(100));
        bundle
            .event_schema
            .entry("datepicker.perf".into())
            .or_default()
            .insert("version".into(), json!(1));

        let schema = bundle.resolved_schema("datepicker.perf");
        assert_eq!(schema["schema_name"], "foo");
        assert_eq!(schema["version"], 1);
        assert_eq!(bundle.resolved_schema("other")["version"], 100);
    }

    #[test]
    fn test_trigger_is_not_serialized() {
        let bundle = TrackingBundle::empty().with_trigger(TriggerFn::noop());
        let value = serde_json::to_value(&bundle).unwrap();
        assert!(value.get("trigger").is_none());
    }
}
