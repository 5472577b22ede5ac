//! Bundle merging
//!
//! Precedence is always ancestor first, local on top. Top-level maps are
//! merged shallowly. Event-keyed maps are merged per event name: an event
//! present on both sides has its inner map merged, an event present on only
//! one side is copied as-is. Inputs are never modified.

use std::collections::BTreeMap;

use crate::bundle::{EventMap, TrackingBundle};

/// Shallow merge of two maps. Keys in `local` replace keys in `ancestor`.
pub fn merge_maps<V: Clone>(
    ancestor: &BTreeMap<String, V>,
    local: &BTreeMap<String, V>,
) -> BTreeMap<String, V> {
    merge_layers([Some(ancestor), Some(local)])
}

/// Shallow merge of any number of optional maps, lowest precedence first.
pub fn merge_layers<'a, V, I>(layers: I) -> BTreeMap<String, V>
where
    V: Clone + 'a,
    I: IntoIterator<Item = Option<&'a BTreeMap<String, V>>>,
{
    let mut merged = BTreeMap::new();
    for layer in layers.into_iter().flatten() {
        for (key, value) in layer {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// Per-event merge of two event-keyed maps.
pub fn merge_event_maps<V: Clone>(ancestor: &EventMap<V>, local: &EventMap<V>) -> EventMap<V> {
    let mut merged = ancestor.clone();
    for (event, local_inner) in local {
        let inner = match ancestor.get(event) {
            Some(ancestor_inner) => merge_maps(ancestor_inner, local_inner),
            None => local_inner.clone(),
        };
        merged.insert(event.clone(), inner);
    }
    merged
}

/// Combine a provider's local bundle with the bundle inherited from its
/// nearest ancestor.
///
/// With `overwrite` set the local bundle replaces the inherited one
/// outright, falling back to the ancestor only when nothing was supplied
/// locally. Without it, the two are deep merged and the ancestor's trigger
/// is kept unless the local bundle brings its own.
///
/// Returns `None` only when both inputs are `None`.
pub fn merge_bundles(
    local: Option<&TrackingBundle>,
    ancestor: Option<&TrackingBundle>,
    overwrite: bool,
) -> Option<TrackingBundle> {
    match (local, ancestor) {
        (Some(local), _) if overwrite => Some(local.clone()),
        (None, ancestor) => ancestor.cloned(),
        (Some(local), None) => Some(local.clone()),
        (Some(local), Some(ancestor)) => Some(TrackingBundle {
            fields: merge_maps(&ancestor.fields, &local.fields),
            options: merge_maps(&ancestor.options, &local.options),
            schema: merge_maps(&ancestor.schema, &local.schema),
            event_fields: merge_event_maps(&ancestor.event_fields, &local.event_fields),
            event_options: merge_event_maps(&ancestor.event_options, &local.event_options),
            event_schema: merge_event_maps(&ancestor.event_schema, &local.event_schema),
            trigger: local.trigger.clone().or_else(|| ancestor.trigger.clone()),
        }),
    }
}
