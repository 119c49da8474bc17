//! Command dispatch: one request, one file operation, console output

use std::path::Path;

use tracing::{debug, instrument, warn};

use crate::application::services::{agent_lines, store::to_pretty_json, summary, template_lines};
use crate::cli::args::{CommandName, Request};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::domain::Document;
use crate::infrastructure::di::ServiceContainer;

/// Printed for a command name that is not recognised.
pub const UNKNOWN_COMMAND: &str = "Unknown command.";

/// Run a single request.
///
/// An unknown command name only prints a notice; it is not an error and
/// the process exits 0.
pub fn execute_command(request: &Request, container: &ServiceContainer) -> CliResult<()> {
    debug!("execute_command: {:?}", request);
    match &request.command {
        CommandName::Load => cmd_load(container, &request.file),
        CommandName::Save => cmd_save(container, &request.file),
        CommandName::List => cmd_list(container, &request.file),
        CommandName::Summary => cmd_summary(container, &request.file),
        CommandName::Agents => cmd_agents(container, &request.file),
        CommandName::Unknown(name) => {
            warn!("unknown command: {}", name);
            output::info(UNKNOWN_COMMAND);
            Ok(())
        }
    }
}

#[instrument(skip(container))]
fn cmd_load(container: &ServiceContainer, file: &Path) -> CliResult<()> {
    let document = container.store.load(file)?;
    output::info(&to_pretty_json(&document)?);
    Ok(())
}

#[instrument(skip(container))]
fn cmd_save(container: &ServiceContainer, file: &Path) -> CliResult<()> {
    container.store.save(&Document::skeleton(), file)?;
    output::saved(file);
    Ok(())
}

#[instrument(skip(container))]
fn cmd_list(container: &ServiceContainer, file: &Path) -> CliResult<()> {
    let document = container.store.load(file)?;
    output::lines(template_lines(&document)?);
    Ok(())
}

#[instrument(skip(container))]
fn cmd_agents(container: &ServiceContainer, file: &Path) -> CliResult<()> {
    let document = container.store.load(file)?;
    output::lines(agent_lines(&document)?);
    Ok(())
}

#[instrument(skip(container))]
fn cmd_summary(container: &ServiceContainer, file: &Path) -> CliResult<()> {
    let document = container.store.load(file)?;
    let summary = summary(&document)?;

    output::section("Prompt parts:");
    for (category, n) in &summary.prompt_parts {
        output::count(category, *n);
    }
    output::total("Templates", summary.templates);
    output::total("Agents", summary.agents);
    output::total("Prompt history", summary.prompt_history);
    Ok(())
}
