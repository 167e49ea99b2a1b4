//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for medicore
#[derive(Parser, Debug)]
#[command(name = "medicore")]
#[command(author, version, about = "Hospital operations assistant - routes requests to specialist agents")]
#[command(long_about = r#"
MediCore routes each request to the hospital agent best suited for it:

  Sang Orkestrator       general questions and clarification
  Admin Pasien           admissions, discharges, patient information
  Penjadwal              booking, cancelling and rescheduling appointments
  Arsiparis Medis        medical records, lab results, prescriptions
  Penagihan & Keuangan   billing, insurance, payments

Configuration files are loaded from (in priority order):
1. MEDICORE_* environment variables (e.g. MEDICORE_GEMINI__MODEL)
2. --config <path>     Explicit config file
3. ./medicore.toml     Project-level config
4. ~/.config/medicore/config.toml   Global config

The API key is read from [gemini] api_key, GEMINI_API_KEY or API_KEY.

Example:
  medicore "saya ingin membuat jadwal temu dokter"
  medicore --model gemini-2.5-pro
  medicore --no-delay --transcript session.jsonl
"#)]
pub struct Cli {
    /// Message to send (starts the interactive chat when omitted)
    pub message: Option<String>,

    /// Model used by the agents to generate replies
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Model used to route requests
    #[arg(long, value_name = "MODEL")]
    pub routing_model: Option<String>,

    /// Skip the pause between routing and generating
    #[arg(long)]
    pub no_delay: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write a JSONL transcript of the session to this file
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,
}
