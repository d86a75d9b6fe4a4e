//! Monitor-mode formatting of received MIDI messages.
//!
//! Output mirrors how a matcher would be authored in the config file, in
//! fixed-width columns so a stream of messages lines up:
//!
//! ```text
//! MIDI:  cc,   1, ch:  1,    value: 127 => Key: A
//! MIDI:  on,  60, ch:  3, velocity:  90 => Key: Shift + A, B
//! ```

use midikeys_core::{KeyChord, NormalizedEvent};

/// Formats one decoded event in config-file spelling.
pub fn format_event(event: &NormalizedEvent) -> String {
    format!(
        "{:>3}, {:>3}, ch: {:>2}, {:>8}: {:>3}",
        event.kind.short_name(),
        event.number,
        event.channel,
        event.kind.value_field(),
        event.value
    )
}

/// Renders matched chords as `Shift + A, B` style press lists.
pub fn format_chords(chords: &[KeyChord]) -> String {
    chords
        .iter()
        .flat_map(|chord| chord.iter())
        .map(|press| {
            let key = uppercase_first(&press.key);
            if press.modifiers.is_empty() {
                key
            } else {
                let mods: Vec<String> =
                    press.modifiers.iter().map(|m| uppercase_first(m)).collect();
                format!("{} + {}", mods.join("+"), key)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// One full monitor line for an event and the chords it matched.
pub fn format_line(event: &NormalizedEvent, chords: &[KeyChord]) -> String {
    if chords.is_empty() {
        format!("MIDI: {}", format_event(event))
    } else {
        format!("MIDI: {} => Key: {}", format_event(event), format_chords(chords))
    }
}

fn uppercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
