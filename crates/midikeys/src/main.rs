//! midikeys entry point.
//!
//! Wires the pieces together in fail-fast order: parse the CLI, load and
//! compile the configuration (all rule validation happens here, before any
//! hardware is touched), resolve and open the MIDI input port, then pump
//! raw messages from the midir callback thread through the
//! [`MappingEngine`] until Ctrl-C.
//!
//! ```text
//! main()
//!  └─ load_rules / compile      -- fatal on any ConfigError
//!  └─ resolve_port / connect    -- midir callback → mpsc channel
//!  └─ event loop                -- decode → lookup → inject (per event)
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use midikeys::application::{monitor, MappingEngine};
use midikeys::infrastructure::key_injection::{EnigoInjector, KeystrokeInjector, NoopInjector};
use midikeys::infrastructure::midi_input::{self, PortChoice};
use midikeys::infrastructure::storage::config::{self as config_storage, DEFAULT_CONFIG_FILE};

use midikeys_core::{compile, RuleSet};

/// Translate MIDI control-surface events into keystrokes.
#[derive(Debug, Parser)]
#[command(name = "midikeys", version, about)]
struct Cli {
    /// The config file to use
    #[arg(short, long, value_name = "FILENAME")]
    config: Option<PathBuf>,

    /// The name of the MIDI input to use; overrides preferredInput from the
    /// config file. Use --list-inputs to list available inputs.
    #[arg(short, long, value_name = "NAME")]
    input: Option<String>,

    /// Log received MIDI messages
    #[arg(short, long)]
    monitor: bool,

    /// Enable debug logging, including logging of received MIDI messages
    #[arg(short, long)]
    debug: bool,

    /// List available MIDI inputs
    #[arg(long)]
    list_inputs: bool,

    /// Create a config file based on the example config
    #[arg(long, value_name = "FILENAME", num_args = 0..=1, default_missing_value = DEFAULT_CONFIG_FILE)]
    create_config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Structured logging; level overridden by `RUST_LOG`.
    let default_filter = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    if cli.list_inputs {
        let ports = midi_input::list_ports()?;
        println!("Available MIDI inputs:");
        for port in &ports {
            println!("  {:?}", port.name);
        }
        return Ok(());
    }

    if let Some(path) = &cli.create_config {
        let first_port = midi_input::list_ports()
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(|p| p.name);
        config_storage::create_config(path, first_port.as_deref())
            .with_context(|| format!("failed to create {}", path.display()))?;
        println!("Created {}", path.display());
        return Ok(());
    }

    // ── Configuration ─────────────────────────────────────────────────────────
    let rules = match config_storage::discover_config(cli.config.as_deref()) {
        Some(path) => {
            info!(path = %path.display(), "using config file");
            config_storage::load_rules(&path)
                .with_context(|| format!("failed to load {}", path.display()))?
        }
        None if cli.monitor => RuleSet::default(),
        None => {
            println!("No config file found. Use --create-config to create one.");
            return Ok(());
        }
    };

    // Compile before touching any hardware: every rule error is fatal here.
    let table = compile(&rules).context("invalid configuration")?;
    info!(rules = rules.key_strokes.len(), "configuration compiled");

    // ── Port selection ────────────────────────────────────────────────────────
    let mut ports = midi_input::list_ports()?;
    if ports.is_empty() {
        anyhow::bail!("no MIDI input ports available");
    }
    let names: Vec<String> = ports.iter().map(|p| p.name.clone()).collect();
    let preferred = cli.input.as_deref().or(rules.preferred_input.as_deref());
    let index = match midi_input::resolve_port(&names, preferred) {
        PortChoice::Resolved(index) => index,
        PortChoice::Prompt => midi_input::prompt_for_port(&ports)?,
    };
    let port = ports.swap_remove(index);
    let port_name = port.name.clone();

    // ── Injection backend ─────────────────────────────────────────────────────
    // Monitor-only sessions (no rules) never open the OS input connection,
    // so no accessibility permissions are needed to just watch messages.
    let injector: Arc<dyn KeystrokeInjector> = if table.is_empty() {
        Arc::new(NoopInjector)
    } else {
        Arc::new(EnigoInjector::new().context("failed to initialize keystroke injection")?)
    };

    let engine = MappingEngine::new(table, injector);

    // ── Event loop ────────────────────────────────────────────────────────────
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let _connection = midi_input::connect(port, tx)?;
    info!(port = %port_name, "connected; press Ctrl-C to exit");

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("shutdown signal received");
                break;
            }
            message = rx.recv() => {
                let Some(bytes) = message else { break };
                if let Some((event, chords)) = engine.handle_message(&bytes) {
                    if cli.monitor || cli.debug {
                        println!("{}", monitor::format_line(&event, &chords));
                    }
                }
            }
        }
    }

    info!("midikeys stopped");
    Ok(())
}
