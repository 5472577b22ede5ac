//! Leaf consumer that fires one event through the nearest context.

use track_core::{FieldMap, OptionMap, Result, TrackingContext};

/// Event fired when a button does not name one.
pub const DEFAULT_EVENT: &str = "generic.click";

/// Label shown when a button does not name one.
pub const DEFAULT_LABEL: &str = "Click Me";

/// A clickable leaf that fires its event with its own call-site fields and
/// options.
#[derive(Debug, Clone, PartialEq)]
pub struct EventButton {
    pub event: String,
    pub fields: FieldMap,
    pub options: OptionMap,
    pub label: String,
}

impl Default for EventButton {
    fn default() -> Self {
        Self {
            event: DEFAULT_EVENT.to_string(),
            fields: FieldMap::new(),
            options: OptionMap::new(),
            label: DEFAULT_LABEL.to_string(),
        }
    }
}

impl EventButton {
    /// A button firing `event` with no call-site fields or options.
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            ..Default::default()
        }
    }

    /// Set call-site fields.
    pub fn with_fields(mut self, fields: FieldMap) -> Self {
        self.fields = fields;
        self
    }

    /// Set call-site options.
    pub fn with_options(mut self, options: OptionMap) -> Self {
        self.options = options;
        self
    }

    /// Fire the button's event through `context`.
    pub fn click(&self, context: &TrackingContext) -> Result<()> {
        tracing::debug!(event = %self.event, label = %self.label, "Button clicked");
        context.trigger(&self.event, Some(&self.fields), Some(&self.options))
    }
}
