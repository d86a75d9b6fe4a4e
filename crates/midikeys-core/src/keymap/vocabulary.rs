//! The fixed key and modifier vocabulary accepted in key-stroke strings.
//!
//! Single-character keys (letters, digits, punctuation) are always accepted
//! and passed through to the injector as-is; only multi-character names are
//! checked against this list.

/// `true` if `name` is a recognized modifier name.
pub fn is_valid_modifier(name: &str) -> bool {
    matches!(name, "alt" | "shift" | "command" | "ctrl")
}

/// `true` if `name` is a recognized multi-character symbolic key name.
///
/// Platform support varies per key; names the injection backend cannot map
/// on the current platform fail at tap time, not at compile time.
pub fn is_valid_key(name: &str) -> bool {
    matches!(
        name,
        // Editing and navigation
        "backspace"
            | "delete"
            | "enter"
            | "tab"
            | "escape"
            | "up"
            | "down"
            | "right"
            | "left"
            | "home"
            | "end"
            | "pageup"
            | "pagedown"
            | "insert"
            | "space"
            | "printscreen"
            // Function keys
            | "f1"
            | "f2"
            | "f3"
            | "f4"
            | "f5"
            | "f6"
            | "f7"
            | "f8"
            | "f9"
            | "f10"
            | "f11"
            | "f12"
            // Modifiers tapped as keys in their own right
            | "command"
            | "alt"
            | "control"
            | "shift"
            | "right_shift"
            // Media keys
            | "audio_mute"
            | "audio_vol_down"
            | "audio_vol_up"
            | "audio_play"
            | "audio_stop"
            | "audio_pause"
            | "audio_prev"
            | "audio_next"
            | "audio_rewind"
            | "audio_forward"
            | "audio_repeat"
            | "audio_random"
            // Numpad
            | "numpad_0"
            | "numpad_1"
            | "numpad_2"
            | "numpad_3"
            | "numpad_4"
            | "numpad_5"
            | "numpad_6"
            | "numpad_7"
            | "numpad_8"
            | "numpad_9"
            // Display and keyboard backlight
            | "lights_mon_up"
            | "lights_mon_down"
            | "lights_kbd_toggle"
            | "lights_kbd_up"
            | "lights_kbd_down"
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_symbolic_keys_are_recognized() {
        for name in ["enter", "escape", "space", "f1", "f12", "pageup", "audio_play"] {
            assert!(is_valid_key(name), "{name} should be a valid key");
        }
    }

    #[test]
    fn test_unknown_names_are_rejected() {
        assert!(!is_valid_key("bogus"));
        assert!(!is_valid_key("F1")); // vocabulary is lowercase
        assert!(!is_valid_key(""));
    }

    #[test]
    fn test_modifier_vocabulary() {
        for name in ["alt", "shift", "command", "ctrl"] {
            assert!(is_valid_modifier(name));
        }
        assert!(!is_valid_modifier("super"));
        assert!(!is_valid_modifier("control")); // a key name, not a modifier name
    }
}
