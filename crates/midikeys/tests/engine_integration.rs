//! Integration tests for the midikeys application pipeline.
//!
//! These exercise the flow the binary wires together: JSONC config text →
//! parsed rules → compiled dispatch table → [`MappingEngine`] fed with raw
//! MIDI bytes, observing the injector and the monitor output.

use std::sync::Arc;

use midikeys::application::{monitor, MappingEngine};
use midikeys::infrastructure::key_injection::{KeystrokeInjector, RecordingInjector};
use midikeys::infrastructure::storage::config::parse_rules;
use midikeys_core::compile;

const CONFIG: &str = r#"{
    // integration-test config
    "preferredInput": "nanoKONTROL2",
    "keyStrokes": [
        // exact match on channel 1
        { "key": "a", "midi": [{ "cc": 1, "channel": 1, "value": 127 }] },
        // wildcard channel and velocity
        { "key": ["shift+a", "b"], "midi": [{ "on": 60, "velocity": "any" }] },
        /* two entries on one rule */
        { "key": "space", "midi": [
            { "cc": 64, "channel": 10, "value": 127 },
            { "off": 61, "velocity": "any" }
        ]}
    ]
}"#;

fn engine_with_recorder() -> (MappingEngine, Arc<RecordingInjector>) {
    let rules = parse_rules(CONFIG).expect("config must parse");
    let table = compile(&rules).expect("config must compile");
    let recorder = Arc::new(RecordingInjector::new());
    let engine = MappingEngine::new(table, Arc::clone(&recorder) as Arc<dyn KeystrokeInjector>);
    (engine, recorder)
}

#[test]
fn test_config_preferred_input_survives_the_jsonc_pipeline() {
    let rules = parse_rules(CONFIG).unwrap();
    assert_eq!(rules.preferred_input.as_deref(), Some("nanoKONTROL2"));
    assert_eq!(rules.key_strokes.len(), 3);
}

#[test]
fn test_exact_control_change_rule_fires_end_to_end() {
    let (engine, recorder) = engine_with_recorder();

    // cc 1, channel 1 (status 0xB0), value 127 → "a"
    let (event, chords) = engine.handle_message(&[0xB0, 1, 127]).unwrap();
    assert_eq!(chords.len(), 1);
    assert_eq!(recorder.taps().len(), 1);
    assert_eq!(recorder.taps()[0].key, "a");

    assert_eq!(
        monitor::format_line(&event, &chords),
        "MIDI:  cc,   1, ch:  1,    value: 127 => Key: A"
    );
}

#[test]
fn test_wrong_value_yields_no_taps() {
    let (engine, recorder) = engine_with_recorder();

    let (_, chords) = engine.handle_message(&[0xB0, 1, 64]).unwrap();
    assert!(chords.is_empty());
    assert!(recorder.taps().is_empty());
}

#[test]
fn test_note_rule_matches_any_channel_and_velocity() {
    let (engine, recorder) = engine_with_recorder();

    // Note-on 60 on 0-based channel 4, velocity 33.
    engine.handle_message(&[0x94, 60, 33]).unwrap();

    let taps = recorder.taps();
    assert_eq!(taps.len(), 2);
    assert_eq!(taps[0].key, "a");
    assert_eq!(taps[0].modifiers, vec!["shift"]);
    assert_eq!(taps[1].key, "b");
}

#[test]
fn test_one_rule_with_two_entries_fires_from_either_shape() {
    let (engine, recorder) = engine_with_recorder();

    // Sustain pedal down on channel 10.
    engine.handle_message(&[0xB9, 64, 127]).unwrap();
    // Note-off 61, any channel/velocity.
    engine.handle_message(&[0x82, 61, 5]).unwrap();

    let keys: Vec<String> = recorder.taps().into_iter().map(|p| p.key).collect();
    assert_eq!(keys, vec!["space", "space"]);
}

#[test]
fn test_system_messages_pass_through_silently() {
    let (engine, recorder) = engine_with_recorder();

    assert!(engine.handle_message(&[0xF8]).is_none());
    assert!(engine.handle_message(&[0xFE]).is_none());
    assert!(recorder.taps().is_empty());
}
