//! Published tracking context
//!
//! A [`TrackingContext`] is what a provider exposes to its subtree: the
//! fully resolved bundle, whether any provider exists above the consumer, and
//! the composed trigger. Descendants combine against this snapshot and never
//! walk further up the tree.

use std::sync::Arc;

use crate::bundle::{FieldMap, OptionMap, TrackingBundle};
use crate::error::Result;
use crate::provider::{ProviderProps, compose};
use crate::trigger::EventTrigger;

/// Configuration visible to a subtree.
#[derive(Debug, Clone, Default)]
pub struct TrackingContext {
    /// Resolved bundle. Meant for providers and diagnostics; consumers should
    /// go through [`TrackingContext::trigger`].
    pub data: Arc<TrackingBundle>,

    /// Whether a provider exists anywhere above this point.
    pub has_provider: bool,

    /// Trigger bound to `data`.
    pub trigger: EventTrigger,
}

impl TrackingContext {
    /// The context seen when no provider exists: empty data, no provider,
    /// no-op trigger.
    pub fn root() -> Self {
        Self::default()
    }

    /// Fire `event` through this context's composed trigger.
    pub fn trigger(
        &self,
        event: &str,
        fields: Option<&FieldMap>,
        options: Option<&OptionMap>,
    ) -> Result<()> {
        self.trigger.trigger(event, fields, options)
    }

    /// Compose a child provider with `props` directly under this context.
    pub fn nest(&self, props: &ProviderProps) -> TrackingContext {
        compose(props, self)
    }

    /// Whether this context was published from the same snapshot as `other`.
    pub fn same_snapshot(&self, other: &TrackingContext) -> bool {
        Arc::ptr_eq(&self.data, &other.data) && self.has_provider == other.has_provider
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_defaults() {
        let root = TrackingContext::root();
        assert!(!root.has_provider);
        assert_eq!(*root.data, TrackingBundle::default());
        assert!(root.data.trigger.is_none());
        assert!(matches!(root.trigger, EventTrigger::Noop));
    }

    #[test]
    fn test_root_trigger_never_fails() {
        let root = TrackingContext::root();
        assert!(root.trigger("e", None, None).is_ok());
        assert!(root.trigger("", None, None).is_ok());
    }

    #[test]
    fn test_nest_marks_provider() {
        let child = TrackingContext::root().nest(&ProviderProps::new());
        assert!(child.has_provider);
        assert!(matches!(child.trigger, EventTrigger::Bound(_)));
    }
}
