//! Nested tracking configuration for UI analytics instrumentation.
//!
//! Providers form a tree. Each one carries partial tracking configuration
//! (default fields, default options, per-event overrides, schema metadata and
//! a downstream trigger) and publishes a [`TrackingContext`] for its
//! subtree. A child combines its own props with the context published by
//! its nearest ancestor; leaf code fires events through the merged
//! [`TrackingContext::trigger`].
//!
//! Parent contexts are passed explicitly. Nothing here looks anything up
//! ambiently, so the merge is a plain function of its inputs.
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use track_core::{FieldMap, ProviderProps, TrackingContext, TriggerFn};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! let send = TriggerFn::new(move |event, fields, _options| {
//!     sink.lock().unwrap().push((event.to_string(), fields.clone()));
//!     Ok(())
//! });
//!
//! let page = TrackingContext::root().nest(
//!     &ProviderProps::new().fields([("location", "top")]).trigger(send),
//! );
//! let picker = page.nest(&ProviderProps::new().event_fields("datepicker.open", [("who", "you")]));
//!
//! let call_site: FieldMap = [("who".to_string(), "me".to_string())].into();
//! picker.trigger("datepicker.open", Some(&call_site), None).unwrap();
//!
//! let seen = seen.lock().unwrap();
//! assert_eq!(seen[0].1["location"], "top");
//! assert_eq!(seen[0].1["who"], "me");
//! ```

pub mod bundle;
pub mod config;
pub mod context;
pub mod error;
pub mod merge;
pub mod provider;
pub mod trigger;

pub use bundle::{EventMap, FieldMap, OptionMap, SchemaMap, TrackingBundle, TriggerFn};
pub use config::ProviderChain;
pub use context::TrackingContext;
pub use error::{Error, Result, TriggerError};
pub use merge::{merge_bundles, merge_event_maps, merge_maps};
pub use provider::{ProviderProps, ProviderState, TrackingProvider, compose};
pub use trigger::EventTrigger;
