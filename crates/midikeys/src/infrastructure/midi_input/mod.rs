//! MIDI input infrastructure: port enumeration, selection, and connection.
//!
//! Raw messages are forwarded from the midir callback thread into a tokio
//! channel and consumed by the async event loop; nothing is decoded or
//! matched on the callback thread beyond copying the bytes out.

use std::io::{self, BufRead, Write};

use midir::{Ignore, MidiInput, MidiInputConnection, MidiInputPort};
use thiserror::Error;
use tokio::sync::mpsc;

/// Client name reported to the OS MIDI subsystem.
const CLIENT_NAME: &str = "midikeys";

/// Error type for MIDI port operations.
#[derive(Debug, Error)]
pub enum MidiPortError {
    /// The OS MIDI subsystem could not be initialized.
    #[error("failed to initialize MIDI input: {0}")]
    Init(String),

    /// There is no input port to connect to.
    #[error("no MIDI input ports available")]
    NoPorts,

    /// Reading the interactive port selection failed.
    #[error("failed to read port selection: {0}")]
    Selection(String),

    /// The interactive selection was not a listed port number.
    #[error("invalid port selection {0:?}")]
    InvalidSelection(String),

    /// Opening the chosen port failed.
    #[error("failed to connect to port {name:?}: {reason}")]
    Connect { name: String, reason: String },
}

/// A MIDI input port together with its display name.
pub struct NamedPort {
    pub index: usize,
    pub name: String,
    port: MidiInputPort,
}

/// Enumerates the available input ports.
///
/// # Errors
///
/// Returns [`MidiPortError::Init`] when the MIDI subsystem is unavailable.
pub fn list_ports() -> Result<Vec<NamedPort>, MidiPortError> {
    let input = MidiInput::new(CLIENT_NAME).map_err(|e| MidiPortError::Init(e.to_string()))?;
    let ports = input
        .ports()
        .into_iter()
        .enumerate()
        .map(|(index, port)| {
            let name = input
                .port_name(&port)
                .unwrap_or_else(|_| format!("port {index}"));
            NamedPort { index, name, port }
        })
        .collect();
    Ok(ports)
}

/// Outcome of resolving the preferred input name against the port list.
#[derive(Debug, PartialEq, Eq)]
pub enum PortChoice {
    /// Use the port at this index without prompting.
    Resolved(usize),
    /// Several ports and no usable preference: the caller must prompt.
    Prompt,
}

/// Resolves the preferred port name (CLI flag over config `preferredInput`)
/// against the available port names.
///
/// An exact name match wins; with a single available port the prompt is
/// skipped; otherwise the user must choose.
pub fn resolve_port(names: &[String], preferred: Option<&str>) -> PortChoice {
    if let Some(preferred) = preferred {
        if let Some(index) = names.iter().position(|n| n == preferred) {
            return PortChoice::Resolved(index);
        }
    }
    if names.len() == 1 {
        PortChoice::Resolved(0)
    } else {
        PortChoice::Prompt
    }
}

/// Prints a numbered port list and reads a selection from stdin.
///
/// # Errors
///
/// Returns [`MidiPortError::Selection`] on read failure and
/// [`MidiPortError::InvalidSelection`] when the input is not a listed
/// port number.
pub fn prompt_for_port(ports: &[NamedPort]) -> Result<usize, MidiPortError> {
    println!("Select an input port:");
    for port in ports {
        println!("  [{}] {}", port.index, port.name);
    }
    print!("Port number: ");
    io::stdout()
        .flush()
        .map_err(|e| MidiPortError::Selection(e.to_string()))?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| MidiPortError::Selection(e.to_string()))?;

    let trimmed = line.trim();
    let index: usize = trimmed
        .parse()
        .map_err(|_| MidiPortError::InvalidSelection(trimmed.to_string()))?;
    if index >= ports.len() {
        return Err(MidiPortError::InvalidSelection(trimmed.to_string()));
    }
    Ok(index)
}

/// Opens `port` and forwards every raw message into `tx`.
///
/// The returned connection must be kept alive for messages to flow; dropping
/// it closes the port.
///
/// # Errors
///
/// Returns [`MidiPortError::Connect`] when the port cannot be opened.
pub fn connect(
    port: NamedPort,
    tx: mpsc::UnboundedSender<Vec<u8>>,
) -> Result<MidiInputConnection<()>, MidiPortError> {
    let mut input = MidiInput::new(CLIENT_NAME).map_err(|e| MidiPortError::Init(e.to_string()))?;
    input.ignore(Ignore::None);
    let name = port.name;
    input
        .connect(
            &port.port,
            "midikeys-in",
            move |_timestamp, bytes, _| {
                // Send failures mean the receiver is gone (shutdown); the
                // connection is about to be dropped anyway.
                let _ = tx.send(bytes.to_vec());
            },
            (),
        )
        .map_err(|e| MidiPortError::Connect {
            name,
            reason: e.to_string(),
        })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
