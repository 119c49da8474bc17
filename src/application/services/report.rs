//! Listing and summary reports over a loaded document
//!
//! Reports are returned as plain lines; printing is left to the CLI layer.

use crate::application::ApplicationResult;
use crate::domain::{Document, FieldValue, AGENTS_KEY, PROMPT_HISTORY_KEY, TEMPLATES_KEY};

pub const NO_TEMPLATES: &str = "No templates found.";
pub const NO_AGENTS: &str = "No agents found.";

/// One `Template ID: <id>, Name: <name>` line per template, in document order,
/// or the single "no templates" notice.
pub fn template_lines(document: &Document) -> ApplicationResult<Vec<String>> {
    let templates = document.templates()?;
    if templates.is_empty() {
        return Ok(vec![NO_TEMPLATES.to_string()]);
    }

    Ok(templates
        .iter()
        .map(|t| {
            format!(
                "Template ID: {}, Name: {}",
                FieldValue(t.id.as_ref()),
                FieldValue(t.name.as_ref())
            )
        })
        .collect())
}

/// One line per agent, with the linked template when there is one.
pub fn agent_lines(document: &Document) -> ApplicationResult<Vec<String>> {
    let agents = document.agents()?;
    if agents.is_empty() {
        return Ok(vec![NO_AGENTS.to_string()]);
    }

    Ok(agents
        .iter()
        .map(|a| {
            let mut line = format!(
                "Agent ID: {}, Name: {}",
                FieldValue(a.id.as_ref()),
                FieldValue(a.name.as_ref())
            );
            if let Some(template_id) = a.linked_template() {
                line.push_str(&format!(", Template: {}", FieldValue(Some(template_id))));
            }
            line
        })
        .collect())
}

/// Entry counts for every section of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// (category, entries) in document order
    pub prompt_parts: Vec<(String, usize)>,
    pub templates: usize,
    pub agents: usize,
    pub prompt_history: usize,
}

pub fn summary(document: &Document) -> ApplicationResult<Summary> {
    Ok(Summary {
        prompt_parts: document.prompt_part_counts()?,
        templates: document.section_len(TEMPLATES_KEY)?,
        agents: document.section_len(AGENTS_KEY)?,
        prompt_history: document.section_len(PROMPT_HISTORY_KEY)?,
    })
}
