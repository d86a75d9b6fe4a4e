//! Key-chord types and the key-stroke string parser.
//!
//! A key-stroke string has the form `[modifier ('+'|'-'|space) ...] key`:
//! the string is split on `+`, `-`, and whitespace, the last token is the
//! key name and everything before it is a modifier.  `"shift+a"`, `"ctrl - c"`
//! and `"alt space"` are all valid.
//!
//! Validation quirk, kept from the reference implementation: unrecognized
//! modifiers are only reported when the key itself is also invalid.  A valid
//! key with a misspelled modifier compiles (the typo surfaces at tap time);
//! it is logged at `warn` level so authors can spot it.

pub mod vocabulary;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;

pub use vocabulary::{is_valid_key, is_valid_modifier};

/// One key press: a key name plus the modifiers held for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPress {
    pub key: String,
    pub modifiers: Vec<String>,
}

/// An ordered sequence of presses executed together for one rule match.
pub type KeyChord = Vec<KeyPress>;

/// Parses one key-stroke string into a [`KeyPress`].
///
/// # Errors
///
/// Returns [`ConfigError::InvalidKeyStroke`] when no key token remains after
/// splitting, or when a multi-character key name is not in the vocabulary.
/// In the latter case any unrecognized modifiers are listed in the same
/// message.
pub fn parse_key_stroke(raw: &str) -> Result<KeyPress, ConfigError> {
    let tokens: Vec<&str> = raw
        .split(|c: char| c == '+' || c == '-' || c.is_whitespace())
        .collect();

    // The last token is the key; separators at the end of the string leave it
    // empty, which is the "no key specified" case.
    let key = tokens.last().copied().unwrap_or("").trim();
    let modifiers: Vec<&str> = tokens[..tokens.len() - 1]
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect();

    if key.is_empty() {
        return Err(ConfigError::InvalidKeyStroke {
            raw: raw.to_string(),
            problem: "no key specified".to_string(),
        });
    }

    let invalid_modifiers: Vec<&str> = modifiers
        .iter()
        .copied()
        .filter(|m| !is_valid_modifier(m))
        .collect();

    if key.chars().count() > 1 && !is_valid_key(key) {
        let mut problem = format!("unrecognized key {key:?}");
        if !invalid_modifiers.is_empty() {
            let listed: Vec<String> =
                invalid_modifiers.iter().map(|m| format!("{m:?}")).collect();
            problem.push_str(&format!(
                " and unrecognized modifiers {}",
                listed.join(", ")
            ));
        }
        return Err(ConfigError::InvalidKeyStroke {
            raw: raw.to_string(),
            problem,
        });
    }

    if !invalid_modifiers.is_empty() {
        warn!(stroke = raw, modifiers = ?invalid_modifiers, "unrecognized modifiers accepted");
    }

    Ok(KeyPress {
        key: key.to_string(),
        modifiers: modifiers.into_iter().map(str::to_string).collect(),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
