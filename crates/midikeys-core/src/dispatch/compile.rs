//! Rule compilation: validates a [`RuleSet`] and builds the dispatch table.
//!
//! Compilation is a pure function of the configuration data.  It either
//! fully succeeds or fails with the first [`ConfigError`] encountered, in
//! rule-declaration order, before any table exists.

use crate::dispatch::rules::{MidiEntry, RuleSet, Scalar};
use crate::dispatch::table::{DispatchTable, MatchSpec};
use crate::domain::event::EventKind;
use crate::domain::selector::{ChannelSelector, ValueSelector};
use crate::error::ConfigError;
use crate::keymap::{parse_key_stroke, KeyChord};

/// How a midi entry declares its kind, resolved once before field parsing.
///
/// Shorthand fields imply both the kind and the `number`; `on`/`off`
/// additionally redirect the match value to the `velocity` field.
enum KindSpec<'a> {
    /// An explicit `type` name, lowercased; canonical names and aliases.
    Explicit(String),
    /// `cc: n` — control-change, `number` = n.
    ShorthandCc(&'a Scalar),
    /// `on: n` — note-on, `number` = n.
    ShorthandOn(&'a Scalar),
    /// `off: n` — note-off, `number` = n.
    ShorthandOff(&'a Scalar),
}

/// Compiles `rules` into a [`DispatchTable`].
///
/// Rules are processed in declaration order; chords landing on the same
/// `(kind, number, channel, value)` tuple accumulate in that order.
///
/// # Errors
///
/// Returns the first [`ConfigError`] found.  No partial table is ever
/// produced.
pub fn compile(rules: &RuleSet) -> Result<DispatchTable, ConfigError> {
    let mut specs = Vec::new();
    for rule in &rules.key_strokes {
        let chord = rule
            .key
            .strokes()
            .map(parse_key_stroke)
            .collect::<Result<KeyChord, _>>()?;
        for entry in &rule.midi {
            specs.push(compile_entry(entry, &chord)?);
        }
    }

    let mut table = DispatchTable::default();
    for spec in specs {
        table.insert(spec);
    }
    Ok(table)
}

fn compile_entry(entry: &MidiEntry, chord: &KeyChord) -> Result<MatchSpec, ConfigError> {
    let (kind, number, value_scalar) = match resolve_kind(entry) {
        Some(KindSpec::Explicit(name)) => {
            let kind = EventKind::from_name(&name).ok_or_else(|| ConfigError::UnknownMidiType {
                kind: name.clone(),
                entry: render(entry),
            })?;
            // Note kinds are authored with `velocity`; accept `value` as a
            // fallback so explicitly-typed entries can use either spelling.
            let value = if kind.is_note() {
                entry.velocity.as_ref().or(entry.value.as_ref())
            } else {
                entry.value.as_ref()
            };
            (kind, entry.number.as_ref(), value)
        }
        Some(KindSpec::ShorthandCc(number)) => {
            (EventKind::ControlChange, Some(number), entry.value.as_ref())
        }
        Some(KindSpec::ShorthandOn(number)) => {
            (EventKind::NoteOn, Some(number), entry.velocity.as_ref())
        }
        Some(KindSpec::ShorthandOff(number)) => {
            (EventKind::NoteOff, Some(number), entry.velocity.as_ref())
        }
        None => {
            return Err(ConfigError::UnknownMidiType {
                kind: "(none)".to_string(),
                entry: render(entry),
            })
        }
    };

    let number = parse_number(number, kind, entry)?;
    let channel = parse_channel(entry.channel.as_ref(), kind, entry)?;
    let value = parse_value(value_scalar, kind, entry)?;

    Ok(MatchSpec {
        kind,
        number,
        channels: vec![channel],
        values: vec![value],
        chord: chord.clone(),
    })
}

fn resolve_kind(entry: &MidiEntry) -> Option<KindSpec<'_>> {
    if let Some(name) = &entry.kind {
        Some(KindSpec::Explicit(name.to_lowercase()))
    } else if let Some(n) = &entry.cc {
        Some(KindSpec::ShorthandCc(n))
    } else if let Some(n) = &entry.on {
        Some(KindSpec::ShorthandOn(n))
    } else {
        entry.off.as_ref().map(KindSpec::ShorthandOff)
    }
}

fn parse_number(
    raw: Option<&Scalar>,
    kind: EventKind,
    entry: &MidiEntry,
) -> Result<u8, ConfigError> {
    let scalar = raw.ok_or_else(|| ConfigError::InvalidNumber {
        kind,
        number: "(missing)".to_string(),
        entry: render(entry),
    })?;
    match scalar.as_int() {
        Some(n) if (0..=127).contains(&n) => Ok(n as u8),
        _ => Err(ConfigError::InvalidNumber {
            kind,
            number: scalar.to_string(),
            entry: render(entry),
        }),
    }
}

fn parse_channel(
    raw: Option<&Scalar>,
    kind: EventKind,
    entry: &MidiEntry,
) -> Result<ChannelSelector, ConfigError> {
    let scalar = match raw {
        None => return Ok(ChannelSelector::Any),
        Some(s) if s.is_any() => return Ok(ChannelSelector::Any),
        Some(s) => s,
    };
    match scalar.as_int() {
        Some(n) if (1..=16).contains(&n) => Ok(ChannelSelector::Specific(n as u8)),
        _ => Err(ConfigError::InvalidChannel {
            kind,
            channel: scalar.to_string(),
            entry: render(entry),
        }),
    }
}

fn parse_value(
    raw: Option<&Scalar>,
    kind: EventKind,
    entry: &MidiEntry,
) -> Result<ValueSelector, ConfigError> {
    let scalar = match raw {
        None => return Ok(ValueSelector::Any),
        Some(s) if s.is_any() => return Ok(ValueSelector::Any),
        Some(s) => s,
    };
    match scalar.as_int() {
        Some(n) if (0..=127).contains(&n) => Ok(ValueSelector::Specific(n as u8)),
        _ => Err(ConfigError::InvalidValue {
            kind,
            field: kind.value_field(),
            value: scalar.to_string(),
            entry: render(entry),
        }),
    }
}

fn render(entry: &MidiEntry) -> String {
    serde_json::to_string(entry).unwrap_or_else(|_| format!("{entry:?}"))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
