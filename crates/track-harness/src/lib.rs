//! Demo harness for track-core.
//!
//! Loads a provider chain from a file, wraps it in a provider whose trigger
//! prints every delivered event as a JSON line, and fires events through
//! [`EventButton`] leaves.

pub mod button;
pub mod delivery;
pub mod error;
pub mod logging;

pub use button::EventButton;
pub use delivery::{Delivery, json_line_trigger};
pub use error::{HarnessError, Result};
