//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Helldivers 2 Major Orders, cached and relayed on command.
#[derive(Debug, Parser)]
#[command(name = "hellbot", version, about)]
pub struct Cli {
    /// Configuration file to load instead of the default search path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the current Major Orders
    Orders {
        /// User the request is attributed to for cooldowns
        #[arg(short, long, default_value = "cli")]
        user: String,
    },

    /// Print an inspirational quote
    Inspire {
        /// User the request is attributed to for cooldowns
        #[arg(short, long, default_value = "cli")]
        user: String,
    },

    /// Check that the remote API answers
    CheckApi,

    /// Deactivate every expired cached order
    Sweep,
}
