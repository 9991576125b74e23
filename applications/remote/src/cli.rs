/// Command-line interface
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "streamer-remote")]
#[command(about = "Remote control for the Streamer casting service", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the casting service (overrides STREAMER_SERVER__URL)
    #[arg(short, long, global = true)]
    pub server: Option<String>,

    /// Device to select whenever it is listed
    #[arg(long, global = true)]
    pub default_device: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Show the panel and read commands from stdin (default)
    Interactive,
    /// Fetch the status once and print the panel
    Status,
    /// Start playback
    Play {
        /// Device name (defaults to the resolved selection)
        #[arg(short, long)]
        device: Option<String>,
        /// Volume level (0-100)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100))]
        volume: Option<u8>,
        /// Loop even if the config turns looping off
        #[arg(long = "loop", conflicts_with = "no_loop")]
        loop_on: bool,
        /// Play once instead of looping
        #[arg(long)]
        no_loop: bool,
    },
    /// Stop playback
    Stop {
        /// Device name (defaults to the resolved selection)
        #[arg(short, long)]
        device: Option<String>,
    },
    /// Change the volume of a device
    Volume {
        /// Volume level (0-100)
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        level: u8,
        /// Device name (defaults to the resolved selection)
        #[arg(short, long)]
        device: Option<String>,
    },
}

/// Looping for a one-shot `play`: an explicit flag wins over the config
pub fn resolve_looping(loop_on: bool, no_loop: bool, configured: bool) -> bool {
    if no_loop {
        false
    } else {
        loop_on || configured
    }
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Interactive)
    }
}
