//! [`RecordingTrigger`] spy for downstream trigger invocations.

use std::sync::{Arc, Mutex, MutexGuard};

use track_core::{FieldMap, OptionMap, TriggerFn};

/// One downstream invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub event: String,
    pub fields: FieldMap,
    pub options: OptionMap,
}

/// Captures every call made to the [`TriggerFn`] it hands out.
///
/// # Example
///
/// ```rust
/// use track_core::{ProviderProps, TrackingContext};
/// use track_test_utils::RecordingTrigger;
///
/// let spy = RecordingTrigger::new();
/// let ctx = TrackingContext::root().nest(&ProviderProps::new().trigger(spy.trigger()));
/// ctx.trigger("generic.click", None, None).unwrap();
/// assert_eq!(spy.count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct RecordingTrigger {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    trigger: TriggerFn,
}

impl Default for RecordingTrigger {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingTrigger {
    /// A spy that records and succeeds.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// A spy that records and then fails with `message`.
    pub fn failing(message: &'static str) -> Self {
        Self::build(Some(message))
    }

    fn build(failure: Option<&'static str>) -> Self {
        let calls: Arc<Mutex<Vec<RecordedCall>>> = Arc::default();
        let sink = Arc::clone(&calls);
        let trigger = TriggerFn::new(move |event, fields, options| {
            sink.lock().unwrap().push(RecordedCall {
                event: event.to_string(),
                fields: fields.clone(),
                options: options.clone(),
            });
            match failure {
                Some(message) => Err(message.into()),
                None => Ok(()),
            }
        });
        Self { calls, trigger }
    }

    /// The trigger handle to pass to a provider.
    pub fn trigger(&self) -> TriggerFn {
        self.trigger.clone()
    }

    /// All recorded calls.
    pub fn calls(&self) -> MutexGuard<'_, Vec<RecordedCall>> {
        self.calls.lock().unwrap()
    }

    /// Number of recorded calls.
    pub fn count(&self) -> usize {
        self.calls().len()
    }

    /// The only recorded call. Panics unless exactly one call was made.
    pub fn single(&self) -> RecordedCall {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one trigger call");
        calls[0].clone()
    }

    /// Forget recorded calls.
    pub fn reset(&self) {
        self.calls().clear();
    }
}
