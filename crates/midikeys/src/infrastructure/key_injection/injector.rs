//! enigo-backed keystroke injection.
//!
//! Key and modifier names come from the midikeys-core vocabulary.  Only
//! names with a cross-platform `enigo::Key` equivalent are mapped here;
//! anything else fails per press with [`InjectionError::UnmappedKey`] and is
//! logged by the engine without stopping the event loop.

use std::sync::Mutex;

use enigo::{Direction, Enigo, Key, Keyboard, Settings};
use midikeys_core::KeyPress;
use tracing::warn;

use super::{InjectionError, KeystrokeInjector};

/// Production injector driving the OS input APIs through `enigo`.
pub struct EnigoInjector {
    // enigo requires &mut for every call; injection is far off the hot path,
    // so a plain mutex is fine.
    enigo: Mutex<Enigo>,
}

impl EnigoInjector {
    /// Creates the injector.
    ///
    /// # Errors
    ///
    /// Returns [`InjectionError::Unavailable`] when the OS input connection
    /// cannot be established (e.g. missing accessibility permissions).
    pub fn new() -> Result<Self, InjectionError> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| InjectionError::Unavailable(e.to_string()))?;
        Ok(Self {
            enigo: Mutex::new(enigo),
        })
    }
}

impl KeystrokeInjector for EnigoInjector {
    fn tap(&self, press: &KeyPress) -> Result<(), InjectionError> {
        let key = map_key(&press.key)?;
        let modifiers = press
            .modifiers
            .iter()
            .map(|m| map_modifier(m))
            .collect::<Result<Vec<Key>, _>>()?;

        let mut enigo = self
            .enigo
            .lock()
            .map_err(|_| InjectionError::Failed("injector lock poisoned".to_string()))?;

        for modifier in &modifiers {
            enigo
                .key(*modifier, Direction::Press)
                .map_err(|e| InjectionError::Failed(e.to_string()))?;
        }

        let result = enigo
            .key(key, Direction::Click)
            .map_err(|e| InjectionError::Failed(e.to_string()));

        // Release held modifiers even when the click failed, so a failing
        // press cannot leave shift/ctrl stuck down.
        for modifier in modifiers.iter().rev() {
            if let Err(e) = enigo.key(*modifier, Direction::Release) {
                warn!(error = %e, "failed to release modifier");
            }
        }

        result
    }
}

fn map_modifier(name: &str) -> Result<Key, InjectionError> {
    match name {
        "shift" => Ok(Key::Shift),
        "ctrl" => Ok(Key::Control),
        "alt" => Ok(Key::Alt),
        "command" => Ok(Key::Meta),
        other => Err(InjectionError::UnmappedKey(other.to_string())),
    }
}

fn map_key(name: &str) -> Result<Key, InjectionError> {
    // Single characters are injected as unicode keys directly.
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(Key::Unicode(c));
    }

    let key = match name {
        "backspace" => Key::Backspace,
        "delete" => Key::Delete,
        "enter" => Key::Return,
        "tab" => Key::Tab,
        "escape" => Key::Escape,
        "up" => Key::UpArrow,
        "down" => Key::DownArrow,
        "right" => Key::RightArrow,
        "left" => Key::LeftArrow,
        "home" => Key::Home,
        "end" => Key::End,
        "pageup" => Key::PageUp,
        "pagedown" => Key::PageDown,
        "space" => Key::Space,
        "f1" => Key::F1,
        "f2" => Key::F2,
        "f3" => Key::F3,
        "f4" => Key::F4,
        "f5" => Key::F5,
        "f6" => Key::F6,
        "f7" => Key::F7,
        "f8" => Key::F8,
        "f9" => Key::F9,
        "f10" => Key::F10,
        "f11" => Key::F11,
        "f12" => Key::F12,
        "command" => Key::Meta,
        "alt" => Key::Alt,
        "control" => Key::Control,
        "shift" => Key::Shift,
        // Vocabulary names with no cross-platform enigo equivalent
        // (right_shift, numpad_*, audio_*, lights_*, printscreen, insert)
        // fail here and are reported per press.
        other => return Err(InjectionError::UnmappedKey(other.to_string())),
    };
    Ok(key)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
