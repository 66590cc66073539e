pub mod json;
pub mod markdown;
pub mod mermaid;

pub use json::JsonBackend;
pub use markdown::MarkdownBackend;
pub use mermaid::{MermaidBackend, MermaidDiagram, to_mermaid};

/// Presentation switches shared by the compiler and the emitters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagramOptions {
    /// Show element labels inside nodes instead of API names.
    pub include_labels: bool,
    /// Keep fault transitions and draw them dotted.
    pub show_fault_paths: bool,
}

impl Default for DiagramOptions {
    fn default() -> Self {
        Self {
            include_labels: true,
            show_fault_paths: false,
        }
    }
}
