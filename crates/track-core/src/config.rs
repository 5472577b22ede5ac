//! Provider chains loaded from configuration files
//!
//! A chain file lists the props of nested providers, outermost first:
//!
//! ```toml
//! [[providers]]
//! fields = { location = "top", language = "english" }
//!
//! [[providers]]
//! overwrite = false
//! [providers.event_fields."datepicker.open"]
//! who = "you"
//! ```
//!
//! Triggers are code, not configuration, so they are attached when the
//! chain is composed.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::bundle::TriggerFn;
use crate::context::TrackingContext;
use crate::provider::ProviderProps;

/// Props of nested providers, outermost first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderChain {
    /// Provider props, outermost first
    #[serde(default)]
    pub providers: Vec<ProviderProps>,
}

impl ProviderChain {
    /// Parse a chain from TOML content.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let chain: ProviderChain = toml::from_str(content)?;
        Ok(chain)
    }

    /// Parse a chain from JSON content.
    pub fn parse_json(content: &str) -> Result<Self> {
        let chain: ProviderChain = serde_json::from_str(content)?;
        Ok(chain)
    }

    /// Load a chain from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(?path, "Loading provider chain");
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&content),
            _ => Self::parse_toml(&content),
        }
    }

    /// Number of providers in the chain.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the chain has no providers.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Compose every provider in order, starting from the root context.
    ///
    /// If `root_trigger` is given it is supplied by an extra outermost
    /// provider, as if the whole tree were wrapped in a provider whose only
    /// prop is the delivery function.
    pub fn compose(&self, root_trigger: Option<TriggerFn>) -> TrackingContext {
        self.providers
            .iter()
            .fold(start_context(root_trigger), |parent, props| parent.nest(props))
    }

    /// Every context along the chain, outermost first. Useful to inspect how
    /// the configuration builds up level by level.
    pub fn contexts(&self, root_trigger: Option<TriggerFn>) -> Vec<TrackingContext> {
        let mut contexts = Vec::with_capacity(self.providers.len());
        let mut parent = start_context(root_trigger);
        for props in &self.providers {
            let context = parent.nest(props);
            contexts.push(context.clone());
            parent = context;
        }
        contexts
    }
}

fn start_context(root_trigger: Option<TriggerFn>) -> TrackingContext {
    let root = TrackingContext::root();
    match root_trigger {
        Some(trigger) => root.nest(&ProviderProps::new().trigger(trigger)),
        None => root,
    }
}
