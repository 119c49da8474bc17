//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use clap_complete::Shell;

use crate::cli::error::{CliError, CliResult};

/// Usage line printed when the command or filename is missing.
pub const USAGE: &str = "Usage: promptdata [load|save|list|summary|agents] filename";

/// Load, initialise and summarise prompt data files
#[derive(Parser, Debug)]
#[command(name = "promptdata")]
#[command(author, version, about, long_about = None)]
#[command(override_usage = "promptdata [OPTIONS] <COMMAND> <FILE>")]
pub struct Cli {
    /// Command: load, save, list, summary, agents
    pub command: Option<String>,

    /// Prompt data file (JSON); may start with '-', so flags go before the command
    #[arg(value_hint = ValueHint::FilePath, allow_hyphen_values = true)]
    pub file: Option<PathBuf>,

    /// Extra arguments (ignored)
    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// Debug level: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Settings file (default: $XDG_CONFIG_HOME/promptdata/promptdata.toml)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print shell completion script and exit
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,
}

/// Command names accepted in the first positional argument.
///
/// Anything unrecognised is kept as `Unknown` so the dispatcher can report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandName {
    Load,
    Save,
    List,
    Summary,
    Agents,
    Unknown(String),
}

impl CommandName {
    pub fn parse(name: &str) -> Self {
        match name {
            "load" => Self::Load,
            "save" => Self::Save,
            "list" => Self::List,
            "summary" => Self::Summary,
            "agents" => Self::Agents,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// A parsed invocation: one command against one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub command: CommandName,
    pub file: PathBuf,
}

impl Cli {
    /// Build the request, or a usage error if either positional is missing.
    pub fn request(&self) -> CliResult<Request> {
        match (&self.command, &self.file) {
            (Some(command), Some(file)) => Ok(Request {
                command: CommandName::parse(command),
                file: file.clone(),
            }),
            _ => Err(CliError::Usage(USAGE.to_string())),
        }
    }
}
