//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// a11ylint - WCAG accessibility checker for HTML document trees
#[derive(Parser)]
#[command(name = "a11ylint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check document trees
    Check {
        /// Document tree files (JSON)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Print per-principle and per-criterion statistics
        #[arg(long)]
        summary: bool,
    },

    /// Write the default configuration (to --config when given)
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },

    /// List built-in rules
    Rules {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
