//! Configuration-time error type shared by the keymap parser and the rule
//! compiler.
//!
//! Every variant is fatal to compilation: `compile` either fully succeeds or
//! reports exactly one of these before any dispatch table exists.  Each
//! variant carries the offending rule's raw text or rendered entry so the
//! message can be surfaced verbatim to the CLI or log.

use thiserror::Error;

use crate::domain::event::EventKind;

/// Errors raised while compiling a [`crate::RuleSet`] into a
/// [`crate::DispatchTable`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A key-stroke string had no key token, or named an unrecognized key.
    ///
    /// When the key is invalid, any unrecognized modifiers in the same stroke
    /// are listed in the message as well.
    #[error("invalid key stroke {raw:?}: {problem}")]
    InvalidKeyStroke {
        /// The key-stroke string exactly as authored.
        raw: String,
        /// Human-readable description of what was wrong.
        problem: String,
    },

    /// The midi entry's kind could not be resolved from its `type` field or
    /// any shorthand field.
    #[error("unknown midi type {kind:?} in entry {entry}")]
    UnknownMidiType {
        /// The unresolvable type name, or `"(none)"` when no kind was given.
        kind: String,
        /// The offending entry rendered as JSON.
        entry: String,
    },

    /// The `number` field is missing, not coercible to an integer, or outside
    /// `[0, 127]`.
    #[error("invalid {kind} entry: invalid number {number} in entry {entry}")]
    InvalidNumber {
        kind: EventKind,
        /// The authored number, or `"(missing)"`.
        number: String,
        entry: String,
    },

    /// The `channel` field is not `all`/`any`/absent and not an integer in
    /// `[1, 16]`.
    #[error("invalid {kind} entry: invalid channel {channel} in entry {entry}")]
    InvalidChannel {
        kind: EventKind,
        channel: String,
        entry: String,
    },

    /// The value field is not `all`/`any`/absent and not an integer in
    /// `[0, 127]`.  `field` is `"velocity"` for note kinds, `"value"`
    /// otherwise.
    #[error("invalid {kind} entry: invalid {field} {value} in entry {entry}")]
    InvalidValue {
        kind: EventKind,
        field: &'static str,
        value: String,
        entry: String,
    },
}
