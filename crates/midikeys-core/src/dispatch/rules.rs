//! Configuration schema for mapping rules.
//!
//! This is the structured shape produced by the external text-to-data step
//! (JSONC stripped of comments, then parsed with `serde_json`).  Field names
//! follow the config file's camelCase spelling.

use serde::{Deserialize, Serialize};

/// Parsed configuration file contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSet {
    /// Name of the MIDI input port to connect to without prompting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_input: Option<String>,
    /// Mapping rules in declaration order.  Order matters: chords
    /// accumulated at the same match tuple execute in this order.
    #[serde(default)]
    pub key_strokes: Vec<KeyStrokeRule>,
}

/// One authored rule: a key specification plus one or more midi entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyStrokeRule {
    pub key: KeySpec,
    pub midi: Vec<MidiEntry>,
}

/// A key specification: a single key-stroke string, or an ordered sequence
/// of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeySpec {
    Single(String),
    Sequence(Vec<String>),
}

impl KeySpec {
    /// The key-stroke strings in author order.
    pub fn strokes(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            KeySpec::Single(s) => std::slice::from_ref(s),
            KeySpec::Sequence(v) => v,
        };
        slice.iter().map(String::as_str)
    }
}

/// One midi matcher entry as authored.
///
/// Either `type` names the kind explicitly, or exactly one of the shorthand
/// fields `cc`/`on`/`off` implies both the kind and the `number`.  `channel`
/// and `value`/`velocity` accept a number, a numeric string, or the wildcard
/// spellings `"all"`/`"any"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MidiEntry {
    /// Explicit kind name; takes precedence over shorthand fields.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Shorthand: control-change with this controller number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<Scalar>,
    /// Shorthand: note-on with this note number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on: Option<Scalar>,
    /// Shorthand: note-off with this note number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub off: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Scalar>,
    /// Match value for note kinds; synonym of `value` there.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub velocity: Option<Scalar>,
}

/// A config scalar that may be authored as a number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Text(String),
}

impl Scalar {
    /// Integer content, coercing numeric strings.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Scalar::Int(n) => Some(*n),
            Scalar::Text(s) => s.trim().parse().ok(),
        }
    }

    /// `true` for the wildcard spellings `"all"` and `"any"`.
    ///
    /// Case-sensitive, as in the reference: `"ALL"` is not a wildcard and
    /// falls through to numeric parsing (where it fails).
    pub fn is_any(&self) -> bool {
        matches!(self, Scalar::Text(s) if s == "all" || s == "any")
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Int(n) => write!(f, "{n}"),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
