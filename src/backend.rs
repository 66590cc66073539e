use crate::error::RenderError;
use crate::flow::ParsedFlow;
use crate::render::{DiagramOptions, JsonBackend, MarkdownBackend, MermaidBackend};

/// A trait for an output backend that turns a parsed flow into text.
/// The result is an opaque blob to callers: they write it out or hand it to a renderer.
pub trait DiagramBackend {
    fn render(&self, flow: &ParsedFlow) -> Result<String, RenderError>;
}

/// The available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Bare Mermaid flowchart markup.
    #[default]
    Mermaid,
    /// A Markdown document embedding the markup in a fenced block.
    Markdown,
    /// The parsed model as JSON.
    Json,
}

impl OutputFormat {
    pub fn backend(self, options: DiagramOptions) -> Box<dyn DiagramBackend> {
        match self {
            OutputFormat::Mermaid => Box::new(MermaidBackend::new(options)),
            OutputFormat::Markdown => Box::new(MarkdownBackend::new(options)),
            OutputFormat::Json => Box::new(JsonBackend),
        }
    }

    /// Conventional file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Mermaid => "mmd",
            OutputFormat::Markdown => "md",
            OutputFormat::Json => "json",
        }
    }
}

/// Renders a flow with the backend for `format`.
pub fn render(
    flow: &ParsedFlow,
    format: OutputFormat,
    options: DiagramOptions,
) -> Result<String, RenderError> {
    format.backend(options).render(flow)
}
