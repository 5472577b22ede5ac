//! Composed event trigger
//!
//! Every provider publishes an [`EventTrigger`] bound to its resolved bundle.
//! Calling it layers the call-site fields and options over the bundle's
//! per-event and global defaults, then hands the result to the bundle's
//! downstream trigger.

use std::sync::Arc;

use crate::bundle::{FieldMap, OptionMap, TrackingBundle};
use crate::error::{Error, Result};
use crate::merge::merge_layers;

/// The trigger a context exposes to its consumers.
#[derive(Debug, Clone, Default)]
pub enum EventTrigger {
    /// Root default when no provider exists: accepts anything, does nothing.
    #[default]
    Noop,

    /// Bound to a provider's resolved bundle.
    Bound(Arc<TrackingBundle>),
}

impl EventTrigger {
    /// Bind a trigger to a resolved bundle snapshot.
    pub fn bound(data: Arc<TrackingBundle>) -> Self {
        EventTrigger::Bound(data)
    }

    /// Fields that would be delivered for `event` given the call-site fields.
    ///
    /// Call-site values win over per-event defaults, which win over the
    /// global defaults.
    pub fn effective_fields(&self, event: &str, fields: Option<&FieldMap>) -> FieldMap {
        match self {
            EventTrigger::Noop => fields.cloned().unwrap_or_default(),
            EventTrigger::Bound(data) => {
                merge_layers([Some(&data.fields), data.event_fields_for(event), fields])
            }
        }
    }

    /// Options that would be delivered for `event` given the call-site options.
    pub fn effective_options(&self, event: &str, options: Option<&OptionMap>) -> OptionMap {
        match self {
            EventTrigger::Noop => options.cloned().unwrap_or_default(),
            EventTrigger::Bound(data) => {
                merge_layers([Some(&data.options), data.event_options_for(event), options])
            }
        }
    }

    /// Fire `event`.
    ///
    /// Fails with [`Error::MissingEvent`] when `event` is empty, before
    /// anything is delivered. A failure of the downstream trigger is returned
    /// as [`Error::Trigger`] with the original error inside.
    pub fn trigger(
        &self,
        event: &str,
        fields: Option<&FieldMap>,
        options: Option<&OptionMap>,
    ) -> Result<()> {
        let data = match self {
            EventTrigger::Noop => return Ok(()),
            EventTrigger::Bound(data) => data,
        };

        if event.is_empty() {
            return Err(Error::MissingEvent);
        }

        let Some(downstream) = &data.trigger else {
            tracing::trace!(event, "No downstream trigger configured, dropping event");
            return Ok(());
        };

        let fields = self.effective_fields(event, fields);
        let options = self.effective_options(event, options);
        tracing::trace!(event, fields = fields.len(), options = options.len(), "Triggering event");

        downstream.call(event, &fields, &options).map_err(Error::Trigger)
    }

    /// The resolved bundle this trigger is bound to, if any.
    pub fn data(&self) -> Option<&Arc<TrackingBundle>> {
        match self {
            EventTrigger::Noop => None,
            EventTrigger::Bound(data) => Some(data),
        }
    }
}
