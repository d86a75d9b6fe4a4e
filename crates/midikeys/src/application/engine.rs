//! MappingEngine: decode each raw MIDI message, match it against the
//! compiled dispatch table, and tap the resulting key chords.
//!
//! The engine owns the immutable [`DispatchTable`] for the lifetime of the
//! process and reaches the OS only through the [`KeystrokeInjector`] trait.
//! A failing press is logged and skipped; it never aborts the remaining
//! presses or subsequent events, so the event-intake loop cannot be crashed
//! by an injection failure.

use std::sync::Arc;

use midikeys_core::{decode, DispatchTable, KeyChord, NormalizedEvent};
use tracing::{debug, error};

use crate::infrastructure::key_injection::KeystrokeInjector;

/// The per-event use case: decode → lookup → inject.
pub struct MappingEngine {
    table: DispatchTable,
    injector: Arc<dyn KeystrokeInjector>,
}

impl MappingEngine {
    pub fn new(table: DispatchTable, injector: Arc<dyn KeystrokeInjector>) -> Self {
        Self { table, injector }
    }

    /// Handles one raw MIDI message.
    ///
    /// Returns the decoded event and the chords it matched (possibly empty)
    /// so monitor mode can render both; returns `None` for messages the
    /// decoder does not understand.
    pub fn handle_message(&self, bytes: &[u8]) -> Option<(NormalizedEvent, Vec<KeyChord>)> {
        let event = decode(bytes)?;
        let chords: Vec<KeyChord> = self
            .table
            .lookup(&event)
            .map(<[KeyChord]>::to_vec)
            .unwrap_or_default();

        for chord in &chords {
            for press in chord {
                debug!(key = %press.key, "tapping key");
                if let Err(e) = self.injector.tap(press) {
                    error!(key = %press.key, error = %e, "keystroke injection failed");
                }
            }
        }

        Some((event, chords))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
