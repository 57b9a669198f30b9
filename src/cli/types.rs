use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(
    name = "history-mate",
    version,
    about = "Browse, search and prune a DiffusionBee image-generation history"
)]
pub(super) struct Cli {
    /// History file to open. Defaults to ~/.diffusionbee/history.json.
    #[arg(long, global = true)]
    pub(super) history: Option<PathBuf>,

    /// Settings file (YAML or JSON).
    #[arg(long, global = true)]
    pub(super) config: Option<PathBuf>,

    /// Raise log verbosity; repeat for more detail. RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub(super) verbose: u8,

    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(super) enum Commands {
    #[command(flatten)]
    History(HistoryCommand),
    /// Inspect or create the settings file.
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Debug, Subcommand)]
pub(super) enum HistoryCommand {
    /// Show one page of prompts, newest first.
    List {
        #[arg(short, long)]
        query: Option<String>,
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        #[arg(long)]
        page_size: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Show every recorded parameter of one image.
    Show {
        job_id: String,
        #[arg(long)]
        json: bool,
    },
    /// Move an image to the trash and drop it from the history.
    Delete {
        job_id: String,
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
    /// Print summary counts as JSON.
    Stats {
        #[arg(short, long)]
        query: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub(super) enum ConfigCommand {
    /// Print the effective settings.
    Show,
    /// Write default settings to the config location.
    Init {
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Serialize)]
pub(super) struct HistoryStats {
    pub(super) source: Option<String>,
    pub(super) query: String,
    pub(super) total_images: usize,
    pub(super) image_records: usize,
    pub(super) grouped_prompts: usize,
    pub(super) groups_in_file: usize,
}

#[derive(Debug, Serialize)]
pub(super) struct ImageDetails {
    pub(super) job_id: Option<String>,
    pub(super) group_id: String,
    pub(super) image_url: Option<String>,
    pub(super) generated_img: Option<PathBuf>,
    pub(super) details: Vec<DetailRow>,
}

#[derive(Debug, Serialize)]
pub(super) struct DetailRow {
    pub(super) label: &'static str,
    pub(super) value: String,
}
