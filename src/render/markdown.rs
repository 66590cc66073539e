use super::{DiagramOptions, to_mermaid};
use crate::backend::DiagramBackend;
use crate::error::RenderError;
use crate::flow::ParsedFlow;
use std::fmt::Write;

/// A Markdown document: flow metadata, the diagram in a fenced `mermaid` block, and tables of
/// element counts and declared variables.
pub struct MarkdownBackend {
    options: DiagramOptions,
}

impl MarkdownBackend {
    pub fn new(options: DiagramOptions) -> Self {
        Self { options }
    }

    fn write_document(&self, flow: &ParsedFlow, out: &mut String) -> std::fmt::Result {
        let summary = flow.summary();

        writeln!(out, "# {}", flow.label)?;
        writeln!(out)?;
        if let Some(description) = &flow.description {
            writeln!(out, "{}", description)?;
            writeln!(out)?;
        }

        writeln!(out, "| Property | Value |")?;
        writeln!(out, "| --- | --- |")?;
        writeln!(out, "| API Name | {} |", cell(&flow.name))?;
        writeln!(out, "| Process Type | {} |", cell(&flow.process_type))?;
        if let Some(status) = &flow.status {
            writeln!(out, "| Status | {} |", cell(status))?;
        }
        writeln!(out, "| Elements | {} |", summary.element_total)?;
        writeln!(out, "| Connectors | {} |", summary.connector_total)?;
        writeln!(out)?;

        writeln!(out, "## Diagram")?;
        writeln!(out)?;
        writeln!(out, "```mermaid")?;
        write!(out, "{}", to_mermaid(flow, self.options))?;
        writeln!(out, "```")?;

        if !summary.element_counts.is_empty() {
            writeln!(out)?;
            writeln!(out, "## Elements")?;
            writeln!(out)?;
            writeln!(out, "| Type | Count |")?;
            writeln!(out, "| --- | --- |")?;
            for (element_type, count) in &summary.element_counts {
                writeln!(out, "| {} | {} |", element_type, count)?;
            }
        }

        if !flow.variables.is_empty() {
            writeln!(out)?;
            writeln!(out, "## Variables")?;
            writeln!(out)?;
            writeln!(out, "| Name | Type | Input | Output | Collection |")?;
            writeln!(out, "| --- | --- | --- | --- | --- |")?;
            for variable in &flow.variables {
                let data_type = match (&variable.data_type, &variable.object_type) {
                    (Some(data_type), Some(object)) => format!("{} ({})", data_type, object),
                    (Some(data_type), None) => data_type.clone(),
                    (None, Some(object)) => object.clone(),
                    (None, None) => String::new(),
                };
                writeln!(
                    out,
                    "| {} | {} | {} | {} | {} |",
                    cell(&variable.name),
                    cell(&data_type),
                    yes_no(variable.is_input),
                    yes_no(variable.is_output),
                    yes_no(variable.is_collection)
                )?;
            }
        }
        Ok(())
    }
}

impl DiagramBackend for MarkdownBackend {
    fn render(&self, flow: &ParsedFlow) -> Result<String, RenderError> {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_document(flow, &mut out);
        Ok(out)
    }
}

/// Escapes the table-cell delimiter.
fn cell(value: &str) -> String {
    value.replace('|', "\\|")
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}
