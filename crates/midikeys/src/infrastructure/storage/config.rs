//! Config file discovery, JSONC reading, and example scaffolding.
//!
//! Config files are JSON with comments (`.jsonc`): `//` line comments and
//! `/* */` block comments are blanked out before parsing, preserving byte
//! offsets so serde_json parse errors still point at the right location.
//!
//! Discovery order: an explicitly given path, else `midikeys_config.jsonc`
//! in the working directory, else `example_config.jsonc`.

use std::fs;
use std::path::{Path, PathBuf};

use midikeys_core::RuleSet;
use thiserror::Error;

/// Default config filename looked for in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "midikeys_config.jsonc";

/// Example config filename used as a fallback.
pub const EXAMPLE_CONFIG_FILE: &str = "example_config.jsonc";

/// The example template embedded into the binary for `--create-config`.
const EXAMPLE_CONFIG: &str = include_str!("../../../example_config.jsonc");

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The (comment-stripped) JSON could not be parsed.
    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// `--create-config` refused to overwrite an existing file.
    #[error("config file {0} already exists")]
    AlreadyExists(PathBuf),
}

/// Resolves which config file to load, if any.
pub fn discover_config(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    [DEFAULT_CONFIG_FILE, EXAMPLE_CONFIG_FILE]
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
}

/// Reads and parses the rule set at `path`.
///
/// An empty (or whitespace/comment-only) file yields the default rule set,
/// matching how the reference treats a blank config.
///
/// # Errors
///
/// Returns [`StorageError::Io`] for file-system errors and
/// [`StorageError::Parse`] for malformed JSON.
pub fn load_rules(path: &Path) -> Result<RuleSet, StorageError> {
    let text = fs::read_to_string(path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_rules(&text)
}

/// Parses JSONC config text into a [`RuleSet`].
///
/// # Errors
///
/// Returns [`StorageError::Parse`] for malformed JSON.
pub fn parse_rules(text: &str) -> Result<RuleSet, StorageError> {
    let stripped = strip_json_comments(text);
    if stripped.trim().is_empty() {
        return Ok(RuleSet::default());
    }
    Ok(serde_json::from_str(&stripped)?)
}

/// Writes the embedded example config to `path`, substituting the
/// `preferredInput` value when a port name is given.
///
/// # Errors
///
/// Returns [`StorageError::AlreadyExists`] when `path` exists and
/// [`StorageError::Io`] on write failure.
pub fn create_config(path: &Path, preferred_input: Option<&str>) -> Result<(), StorageError> {
    if path.exists() {
        return Err(StorageError::AlreadyExists(path.to_path_buf()));
    }
    let contents = match preferred_input {
        Some(name) => EXAMPLE_CONFIG.replacen(
            r#""preferredInput": """#,
            &format!(r#""preferredInput": "{name}""#),
            1,
        ),
        None => EXAMPLE_CONFIG.to_string(),
    };
    fs::write(path, contents).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Blanks `//` and `/* */` comments outside string literals.
///
/// Comment bytes become spaces and newlines are kept, so line/column
/// positions in parse errors match the original text.
pub fn strip_json_comments(text: &str) -> String {
    enum State {
        Normal,
        InString { escaped: bool },
        LineComment,
        BlockComment { star: bool },
    }

    let mut out = String::with_capacity(text.len());
    let mut state = State::Normal;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            State::Normal => match c {
                '"' => {
                    state = State::InString { escaped: false };
                    out.push(c);
                }
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    state = State::LineComment;
                    out.push_str("  ");
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    state = State::BlockComment { star: false };
                    out.push_str("  ");
                }
                _ => out.push(c),
            },
            State::InString { escaped } => {
                match c {
                    '\\' if !escaped => state = State::InString { escaped: true },
                    '"' if !escaped => state = State::Normal,
                    _ => state = State::InString { escaped: false },
                }
                out.push(c);
            }
            State::LineComment => {
                if c == '\n' {
                    state = State::Normal;
                    out.push('\n');
                } else {
                    out.push(' ');
                }
            }
            State::BlockComment { star } => {
                if star && c == '/' {
                    state = State::Normal;
                    out.push(' ');
                } else {
                    state = State::BlockComment { star: c == '*' };
                    out.push(if c == '\n' { '\n' } else { ' ' });
                }
            }
        }
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
