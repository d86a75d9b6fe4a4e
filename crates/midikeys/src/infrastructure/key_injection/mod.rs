//! OS keystroke injection behind a mockable trait.
//!
//! The production implementation drives `enigo`; tests use
//! [`mock::RecordingInjector`] or the generated `MockKeystrokeInjector`.
//! Injection failures are per-press concerns: the engine logs them and keeps
//! going, so a single unmappable key never stalls the event loop.

pub mod injector;
pub mod mock;

use midikeys_core::KeyPress;
use thiserror::Error;

pub use injector::EnigoInjector;
pub use mock::{NoopInjector, RecordingInjector};

/// Error type for keystroke injection.
#[derive(Debug, Error)]
pub enum InjectionError {
    /// The injection backend could not be constructed.
    #[error("injector unavailable: {0}")]
    Unavailable(String),

    /// The key or modifier name has no mapping on this platform.
    #[error("unmapped key name {0:?}")]
    UnmappedKey(String),

    /// The OS rejected the synthetic input.
    #[error("injection failed: {0}")]
    Failed(String),
}

/// Trait abstracting OS keystroke injection.
#[cfg_attr(test, mockall::automock)]
pub trait KeystrokeInjector: Send + Sync {
    /// Taps one key press: modifiers down, key click, modifiers up.
    ///
    /// # Errors
    ///
    /// Returns [`InjectionError`] when the key cannot be mapped or the OS
    /// rejects the input.  Callers treat this as a per-press failure.
    fn tap(&self, press: &KeyPress) -> Result<(), InjectionError>;
}
