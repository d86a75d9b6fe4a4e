//! Integration tests for the midikeys-core engine.
//!
//! These tests exercise the full pipeline through the public API: JSON
//! configuration text → [`RuleSet`] → `compile` → `DispatchTable::lookup`
//! against events built from raw MIDI bytes.

use midikeys_core::{compile, decode, ConfigError, EventKind, NormalizedEvent, RuleSet};

/// Parses JSON config text and compiles it, panicking on failure.
fn table_from(json: &str) -> midikeys_core::DispatchTable {
    let rules: RuleSet = serde_json::from_str(json).expect("config must deserialize");
    compile(&rules).expect("config must compile")
}

fn event(kind: EventKind, number: u8, channel: u8, value: u8) -> NormalizedEvent {
    NormalizedEvent {
        kind,
        number,
        channel,
        value,
    }
}

#[test]
fn test_compiled_rule_matches_event_built_from_its_own_tuple() {
    let table = table_from(
        r#"{ "keyStrokes": [
            { "key": "a", "midi": [{ "cc": 1, "channel": 1, "value": 127 }] }
        ]}"#,
    );

    let chords = table
        .lookup(&event(EventKind::ControlChange, 1, 1, 127))
        .expect("exact tuple must match");
    assert_eq!(chords.len(), 1);
    assert_eq!(chords[0][0].key, "a");
    assert!(chords[0][0].modifiers.is_empty());

    assert_eq!(table.lookup(&event(EventKind::ControlChange, 1, 1, 64)), None);
}

#[test]
fn test_wildcard_precedence_channel_tier_resolves_before_value_tier() {
    // One rule with specific channel 2 and any value, one with any channel
    // and specific value 7.  The event (channel 2, value 7) must match only
    // the specific-channel rule.
    let table = table_from(
        r#"{ "keyStrokes": [
            { "key": "x", "midi": [{ "cc": 1, "channel": 2, "value": "any" }] },
            { "key": "y", "midi": [{ "cc": 1, "channel": "any", "value": 7 }] }
        ]}"#,
    );

    let chords = table
        .lookup(&event(EventKind::ControlChange, 1, 2, 7))
        .expect("specific channel bucket must match");
    assert_eq!(chords.len(), 1);
    assert_eq!(chords[0][0].key, "x");
}

#[test]
fn test_accumulated_rules_fire_in_declaration_order() {
    let table = table_from(
        r#"{ "keyStrokes": [
            { "key": "x", "midi": [{ "on": 60, "channel": 1, "velocity": 100 }] },
            { "key": "y", "midi": [{ "on": 60, "channel": 1, "velocity": 100 }] }
        ]}"#,
    );

    let chords = table
        .lookup(&event(EventKind::NoteOn, 60, 1, 100))
        .expect("both rules share the tuple");
    let keys: Vec<&str> = chords.iter().map(|c| c[0].key.as_str()).collect();
    assert_eq!(keys, vec!["x", "y"]);
}

#[test]
fn test_unknown_number_for_configured_kind_is_no_match() {
    let table = table_from(
        r#"{ "keyStrokes": [
            { "key": "a", "midi": [{ "cc": 1, "channel": "all" }] }
        ]}"#,
    );
    assert_eq!(table.lookup(&event(EventKind::ControlChange, 2, 1, 0)), None);
}

#[test]
fn test_value_zero_prefers_exact_rule_over_coexisting_wildcard() {
    let table = table_from(
        r#"{ "keyStrokes": [
            { "key": "w", "midi": [{ "cc": 5, "channel": 1, "value": "all" }] },
            { "key": "z", "midi": [{ "cc": 5, "channel": 1, "value": 0 }] }
        ]}"#,
    );

    let chords = table
        .lookup(&event(EventKind::ControlChange, 5, 1, 0))
        .unwrap();
    assert_eq!(chords.len(), 1);
    assert_eq!(chords[0][0].key, "z");

    // Any other value falls back to the wildcard rule.
    let chords = table
        .lookup(&event(EventKind::ControlChange, 5, 1, 1))
        .unwrap();
    assert_eq!(chords[0][0].key, "w");
}

#[test]
fn test_key_sequence_with_modifiers_matches_any_velocity_note() {
    let table = table_from(
        r#"{ "keyStrokes": [
            { "key": ["shift+a", "b"], "midi": [{ "on": 60, "velocity": "any" }] }
        ]}"#,
    );

    let chords = table
        .lookup(&event(EventKind::NoteOn, 60, 3, 90))
        .expect("any-channel any-velocity note rule must match");
    let chord = &chords[0];
    assert_eq!(chord[0].key, "a");
    assert_eq!(chord[0].modifiers, vec!["shift"]);
    assert_eq!(chord[1].key, "b");
    assert!(chord[1].modifiers.is_empty());
}

#[test]
fn test_channel_zero_in_config_is_invalid() {
    let rules: RuleSet = serde_json::from_str(
        r#"{ "keyStrokes": [
            { "key": "a", "midi": [{ "cc": 1, "channel": 0 }] }
        ]}"#,
    )
    .unwrap();
    assert!(matches!(
        compile(&rules),
        Err(ConfigError::InvalidChannel { .. })
    ));
}

#[test]
fn test_empty_key_raises_invalid_key_stroke_citing_the_stroke() {
    let rules: RuleSet = serde_json::from_str(
        r#"{ "keyStrokes": [
            { "key": "shift+", "midi": [{ "cc": 1 }] }
        ]}"#,
    )
    .unwrap();
    match compile(&rules).unwrap_err() {
        ConfigError::InvalidKeyStroke { raw, .. } => assert_eq!(raw, "shift+"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_decoded_bytes_drive_lookup_end_to_end() {
    let table = table_from(
        r#"{ "keyStrokes": [
            { "key": "space", "midi": [{ "cc": 64, "channel": 10, "value": 127 }] }
        ]}"#,
    );

    // Control-change on 0-based channel 9 → 1-based channel 10.
    let event = decode(&[0xB9, 64, 127]).expect("valid control-change bytes");
    let chords = table.lookup(&event).expect("decoded event must match");
    assert_eq!(chords[0][0].key, "space");

    // Same controller, different value: no match.
    let event = decode(&[0xB9, 64, 126]).unwrap();
    assert_eq!(table.lookup(&event), None);
}
