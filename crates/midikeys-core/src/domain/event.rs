//! Event kinds and the normalized event shape delivered by the MIDI decoder.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of MIDI message kinds the engine understands.
///
/// Config files name kinds either canonically (`"controlchange"`,
/// `"noteon"`, `"noteoff"`, `"programchange"`) or via the shorthand aliases
/// `"cc"`, `"on"`, `"off"`, `"pg"`.  Anything else fails compilation with
/// [`crate::ConfigError::UnknownMidiType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    ControlChange,
    NoteOn,
    NoteOff,
    ProgramChange,
}

impl EventKind {
    /// Resolves a lowercased config type name, accepting both canonical
    /// names and the shorthand aliases.
    ///
    /// Returns `None` for unrecognized names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "controlchange" | "cc" => Some(Self::ControlChange),
            "noteon" | "on" => Some(Self::NoteOn),
            "noteoff" | "off" => Some(Self::NoteOff),
            "programchange" | "pg" => Some(Self::ProgramChange),
            _ => None,
        }
    }

    /// The shorthand alias, as used in monitor output.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::ControlChange => "cc",
            Self::NoteOn => "on",
            Self::NoteOff => "off",
            Self::ProgramChange => "pg",
        }
    }

    /// `true` for the note kinds, whose match value is authored as
    /// `velocity` rather than `value`.
    pub fn is_note(&self) -> bool {
        matches!(self, Self::NoteOn | Self::NoteOff)
    }

    /// The config field name that carries this kind's match value.
    ///
    /// Used verbatim in diagnostics so error messages name the field the
    /// author actually wrote.
    pub fn value_field(&self) -> &'static str {
        if self.is_note() {
            "velocity"
        } else {
            "value"
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ControlChange => "controlchange",
            Self::NoteOn => "noteon",
            Self::NoteOff => "noteoff",
            Self::ProgramChange => "programchange",
        };
        f.write_str(name)
    }
}

/// One decoded MIDI event, as supplied by the byte decoder.
///
/// `channel` is 1-based (`1..=16`); `number` and `value` are 7-bit MIDI data
/// bytes.  Program-change events carry `value` 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedEvent {
    pub kind: EventKind,
    pub number: u8,
    pub channel: u8,
    pub value: u8,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
