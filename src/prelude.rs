//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the flowviz crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowviz::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let raw = RawFlow::from_file("force-app/main/default/flows/Onboarding.flow-meta.xml")?;
//! let flow = Compiler::builder(raw).with_name("Onboarding").build().compile()?;
//! let markdown = render(&flow, OutputFormat::Markdown, DiagramOptions::default())?;
//! println!("{}", markdown);
//! # Ok(())
//! # }
//! ```

// Pipeline
pub use crate::compiler::{Compiler, ConnectorCollector, FlowAssembler, FlowHeader};
pub use crate::source::RawFlow;

// Model
pub use crate::flow::{
    ElementType, END_NAME, FlowCondition, FlowConnector, FlowElement, FlowRule,
    FlowScheduledPath, FlowSummary, FlowVariable, FlowWaitEvent, IntoFlow, ParsedFlow,
    START_NAME,
};

// Output
pub use crate::backend::{DiagramBackend, OutputFormat, render};
pub use crate::render::{DiagramOptions, to_mermaid};
pub use crate::sanitize::{sanitize_id, sanitize_label};

// Error types
pub use crate::error::{ConversionError, FlowError, RenderError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
