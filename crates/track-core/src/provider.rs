//! Tracking providers
//!
//! A provider takes the props supplied to it directly and the context
//! published by its nearest ancestor, and publishes a new context for its
//! own subtree. [`compose`] is the pure step; [`TrackingProvider`] wraps it
//! with the publish/recompute lifecycle of a mounted node.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Result;
use crate::bundle::{EventMap, FieldMap, OptionMap, SchemaMap, TrackingBundle, TriggerFn};
use crate::context::TrackingContext;
use crate::merge::merge_bundles;
use crate::trigger::EventTrigger;

/// Props supplied directly to a provider.
///
/// Every map is optional. A provider given no maps and no trigger has no
/// local bundle at all and simply republishes what it inherits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderProps {
    /// Default fields for every event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldMap>,

    /// Default trigger options for every event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<OptionMap>,

    /// Global schema metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaMap>,

    /// Per-event fields
    #[serde(default, alias = "eventFields", skip_serializing_if = "Option::is_none")]
    pub event_fields: Option<EventMap<String>>,

    /// Per-event options
    #[serde(default, alias = "eventOptions", skip_serializing_if = "Option::is_none")]
    pub event_options: Option<EventMap<String>>,

    /// Per-event schema metadata
    #[serde(default, alias = "eventSchema", skip_serializing_if = "Option::is_none")]
    pub event_schema: Option<EventMap<Value>>,

    /// Downstream trigger. Never loaded from a file.
    #[serde(skip)]
    pub trigger: Option<TriggerFn>,

    /// Replace the inherited configuration instead of merging with it
    #[serde(default)]
    pub overwrite: bool,
}

fn string_map<I, K, V>(pairs: I) -> FieldMap
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

impl ProviderProps {
    /// Props with nothing supplied.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse props from TOML.
    ///
    /// # Example
    ///
    /// ```
    /// use track_core::ProviderProps;
    ///
    /// let props = ProviderProps::from_toml(r#"
    /// overwrite = true
    ///
    /// [fields]
    /// location = "top"
    ///
    /// [event_fields."datepicker.open"]
    /// who = "you"
    /// "#).unwrap();
    ///
    /// assert!(props.overwrite);
    /// assert_eq!(props.fields.unwrap()["location"], "top");
    /// ```
    pub fn from_toml(content: &str) -> Result<Self> {
        let props: ProviderProps = toml::from_str(content)?;
        Ok(props)
    }

    /// Parse props from JSON. The camelCase prop names are accepted.
    pub fn from_json(content: &str) -> Result<Self> {
        let props: ProviderProps = serde_json::from_str(content)?;
        Ok(props)
    }

    /// Add default fields.
    pub fn fields<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.fields.get_or_insert_with(FieldMap::new).extend(string_map(fields));
        self
    }

    /// Add default options.
    pub fn options<I, K, V>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.options.get_or_insert_with(OptionMap::new).extend(string_map(options));
        self
    }

    /// Add global schema entries.
    pub fn schema<I, K, V>(mut self, schema: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.schema
            .get_or_insert_with(SchemaMap::new)
            .extend(schema.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Add fields for a single event.
    pub fn event_fields<I, K, V>(mut self, event: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.event_fields
            .get_or_insert_with(EventMap::new)
            .entry(event.into())
            .or_default()
            .extend(string_map(fields));
        self
    }

    /// Add options for a single event.
    pub fn event_options<I, K, V>(mut self, event: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.event_options
            .get_or_insert_with(EventMap::new)
            .entry(event.into())
            .or_default()
            .extend(string_map(options));
        self
    }

    /// Add schema entries for a single event.
    pub fn event_schema<I, K, V>(mut self, event: impl Into<String>, schema: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.event_schema
            .get_or_insert_with(EventMap::new)
            .entry(event.into())
            .or_default()
            .extend(schema.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Set the downstream trigger.
    pub fn trigger(mut self, trigger: TriggerFn) -> Self {
        self.trigger = Some(trigger);
        self
    }

    /// Set the overwrite switch.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Whether any data prop or a trigger was supplied.
    pub fn has_local_data(&self) -> bool {
        self.fields.is_some()
            || self.options.is_some()
            || self.schema.is_some()
            || self.event_fields.is_some()
            || self.event_options.is_some()
            || self.event_schema.is_some()
            || self.trigger.is_some()
    }

    /// The bundle these props contribute, or `None` if nothing was supplied.
    pub fn local_bundle(&self) -> Option<TrackingBundle> {
        if !self.has_local_data() {
            return None;
        }
        Some(TrackingBundle {
            fields: self.fields.clone().unwrap_or_default(),
            options: self.options.clone().unwrap_or_default(),
            schema: self.schema.clone().unwrap_or_default(),
            event_fields: self.event_fields.clone().unwrap_or_default(),
            event_options: self.event_options.clone().unwrap_or_default(),
            event_schema: self.event_schema.clone().unwrap_or_default(),
            trigger: self.trigger.clone(),
        })
    }
}

/// Compute the context a provider with `props` publishes under `parent`.
///
/// The result always has `has_provider` set and a trigger bound to the
/// freshly merged bundle.
pub fn compose(props: &ProviderProps, parent: &TrackingContext) -> TrackingContext {
    let local = props.local_bundle();
    let data = merge_bundles(local.as_ref(), Some(&parent.data), props.overwrite).unwrap_or_default();
    let data = Arc::new(data);

    tracing::debug!(
        target: "track_core::provider",
        overwrite = props.overwrite,
        inherited = parent.has_provider,
        entries = data.entry_count(),
        has_trigger = data.trigger.is_some(),
        "Composed tracking context"
    );

    TrackingContext {
        trigger: EventTrigger::bound(Arc::clone(&data)),
        data,
        has_provider: true,
    }
}

/// Observable lifecycle state of a [`TrackingProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderState {
    /// Not yet rendered; nothing has been published.
    Unpublished,
    /// A context is available to the subtree.
    Published,
}

#[derive(Debug)]
struct Published {
    context: TrackingContext,
    parent: TrackingContext,
}

/// A mounted provider node.
///
/// Call [`render`](TrackingProvider::render) with the parent's current
/// context on every pass. The context is recomputed when the props or the
/// parent's published snapshot changed, and reused otherwise.
#[derive(Debug)]
pub struct TrackingProvider {
    props: ProviderProps,
    published: Option<Published>,
    dirty: bool,
}

impl TrackingProvider {
    /// Create an unpublished provider.
    pub fn new(props: ProviderProps) -> Self {
        Self {
            props,
            published: None,
            dirty: false,
        }
    }

    /// Current props.
    pub fn props(&self) -> &ProviderProps {
        &self.props
    }

    /// Replace the props. The next render recomputes if they differ.
    pub fn set_props(&mut self, props: ProviderProps) {
        if props != self.props {
            self.props = props;
            self.dirty = true;
        }
    }

    /// Publish this provider's context under `parent`, or return the cached
    /// one if neither the props nor the parent snapshot changed.
    pub fn render(&mut self, parent: &TrackingContext) -> &TrackingContext {
        let fresh = matches!(
            &self.published,
            Some(published) if !self.dirty && published.parent.same_snapshot(parent)
        );
        if fresh {
            tracing::trace!(target: "track_core::provider", "Reusing published tracking context");
        } else {
            self.published = None;
        }
        self.dirty = false;

        let props = &self.props;
        let published = self.published.get_or_insert_with(|| Published {
            context: compose(props, parent),
            parent: parent.clone(),
        });
        &published.context
    }

    /// The published context, if the provider has rendered at least once.
    pub fn context(&self) -> Option<&TrackingContext> {
        self.published.as_ref().map(|published| &published.context)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ProviderState {
        match self.published {
            Some(_) => ProviderState::Published,
            None => ProviderState::Unpublished,
        }
    }

    /// Whether a context has been published.
    pub fn is_published(&self) -> bool {
        self.state() == ProviderState::Published
    }
}
