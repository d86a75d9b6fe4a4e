//! Application use cases.
//!
//! Depends only on midikeys-core types and the infrastructure traits; all
//! concrete infrastructure is injected at construction time.

pub mod engine;
pub mod monitor;

pub use engine::MappingEngine;
