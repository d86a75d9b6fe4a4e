//! Test and no-op injector implementations.

use std::sync::Mutex;

use midikeys_core::KeyPress;

use super::{InjectionError, KeystrokeInjector};

/// Injector that does nothing.
///
/// Used for monitor-only sessions, where no rules are configured and the OS
/// input connection (with its permission requirements) should not be opened
/// at all.
#[derive(Debug, Default)]
pub struct NoopInjector;

impl KeystrokeInjector for NoopInjector {
    fn tap(&self, _press: &KeyPress) -> Result<(), InjectionError> {
        Ok(())
    }
}

/// Test double that records every tapped press.
///
/// Optionally fails on one configured key name while still recording the
/// attempt, so tests can assert the engine continues past per-press
/// failures.
#[derive(Debug, Default)]
pub struct RecordingInjector {
    taps: Mutex<Vec<KeyPress>>,
    fail_on: Option<String>,
}

impl RecordingInjector {
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder that fails (after recording) whenever `key` is tapped.
    pub fn failing_on(key: &str) -> Self {
        Self {
            taps: Mutex::new(Vec::new()),
            fail_on: Some(key.to_string()),
        }
    }

    /// All presses tapped so far, in order.
    pub fn taps(&self) -> Vec<KeyPress> {
        self.taps.lock().expect("taps lock").clone()
    }
}

impl KeystrokeInjector for RecordingInjector {
    fn tap(&self, press: &KeyPress) -> Result<(), InjectionError> {
        self.taps.lock().expect("taps lock").push(press.clone());
        match &self.fail_on {
            Some(key) if *key == press.key => {
                Err(InjectionError::Failed("injected failure".to_string()))
            }
            _ => Ok(()),
        }
    }
}
