//! Rule compilation and event matching.
//!
//! `rules` defines the configuration schema as consumed from the (external)
//! JSONC parsing step; `compile` turns a [`rules::RuleSet`] into a
//! [`table::DispatchTable`]; `table` implements the lookup with
//! specific-before-wildcard fallback at the channel and value tiers.

pub mod compile;
pub mod rules;
pub mod table;

pub use compile::compile;
pub use rules::{KeySpec, KeyStrokeRule, MidiEntry, RuleSet, Scalar};
pub use table::DispatchTable;
