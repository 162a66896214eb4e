//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Extract translation keys from web component markup
//! - `init`: Initialize wclex configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by scanning commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable list of keys per file
    #[default]
    Text,
    /// JSON array of `{ file, keys }` objects
    Json,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Files or directories to scan (default: configured includes under the source root)
    pub paths: Vec<PathBuf>,

    /// Attribute carrying the translation keys (overrides config file)
    #[arg(long)]
    pub attr: Option<String>,

    /// Attribute carrying the JSON options (overrides config file)
    #[arg(long)]
    pub option_attr: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translation keys from data-i18n style attributes
    Extract(ExtractCommand),
    /// Initialize a new .wclexrc.json configuration file
    Init,
}
