use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::types::OutputFormat;

/// Rename the pfSense course videos to their course outline titles
#[derive(Parser, Debug)]
#[command(name = "reelname")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output (any non-empty NO_COLOR value counts)
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rename every recording found in the video directory
    Apply {
        /// Directory containing the videos [default: config file value, then the current directory]
        #[arg(value_name = "DIR", env = "REELNAME_DIR")]
        directory: Option<PathBuf>,

        /// Report what would be renamed without touching any file
        #[arg(long)]
        dry_run: bool,

        /// Append a timestamped log of the run to this file
        #[arg(long, value_name = "PATH")]
        log_file: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,

        /// Suppress progress output (exit status still reports failures)
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show the rename table, with per-entry status when a directory is known
    List {
        /// Directory to check the entries against
        #[arg(value_name = "DIR", env = "REELNAME_DIR")]
        directory: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// Show version information
    Version {
        /// Output format
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,

        /// Write the completion file into this directory instead of stdout
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
}
