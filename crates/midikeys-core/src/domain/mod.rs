//! Pure domain types: event kinds, match selectors, and normalized events.

pub mod event;
pub mod selector;

pub use event::{EventKind, NormalizedEvent};
pub use selector::{ChannelSelector, ValueSelector};
