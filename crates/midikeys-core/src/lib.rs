//! # midikeys-core
//!
//! Rule compilation and event-matching engine for midikeys: turns a list of
//! human-authored mapping rules into an immutable dispatch table, and resolves
//! each incoming MIDI event against that table to produce the ordered key
//! chord(s) to execute.
//!
//! This crate has zero dependencies on OS APIs, hardware ports, or file I/O.
//! It is used by the `midikeys` application crate, which supplies the raw MIDI
//! byte stream and performs the actual keystroke injection.
//!
//! # Architecture overview
//!
//! - **`dispatch`** – The heart of the engine.  `compile` validates a
//!   [`RuleSet`] and builds a [`DispatchTable`]: a nested lookup from event
//!   kind → number → channel selector → value selector → key chords.
//!   `DispatchTable::lookup` resolves a decoded event with
//!   specific-before-wildcard fallback at the channel and value tiers.
//!
//! - **`keymap`** – The fixed key/modifier vocabulary and the parser that
//!   turns key-stroke strings like `"shift+a"` into [`KeyPress`] values.
//!
//! - **`domain`** – Pure data types: [`EventKind`], the typed wildcard
//!   selectors, and [`NormalizedEvent`].
//!
//! - **`midi`** – Decoding of raw MIDI bytes into [`NormalizedEvent`]s.

pub mod dispatch;
pub mod domain;
pub mod error;
pub mod keymap;
pub mod midi;

// Re-export the most-used types at the crate root so callers can write
// `midikeys_core::DispatchTable` instead of the full module path.
pub use dispatch::compile::compile;
pub use dispatch::rules::{KeySpec, KeyStrokeRule, MidiEntry, RuleSet, Scalar};
pub use dispatch::table::DispatchTable;
pub use domain::event::{EventKind, NormalizedEvent};
pub use domain::selector::{ChannelSelector, ValueSelector};
pub use error::ConfigError;
pub use keymap::{KeyChord, KeyPress};
pub use midi::decode;
