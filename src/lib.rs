//! # flowviz - Flow-to-Diagram Compiler
//!
//! **flowviz** turns declarative process definitions ("flows": typed steps joined by typed
//! transitions) into Mermaid flowchart markup. Layout is left to whatever renders the markup.
//!
//! ## Core Workflow
//!
//! 1.  **Load**: Deserialize a flow metadata document with `RawFlow::from_xml` (or
//!     `RawFlow::from_file`). Repeated tags always become ordered lists, whether the document
//!     holds one of them or many.
//! 2.  **Compile**: Use `Compiler::builder` to turn the source into a `ParsedFlow`. Every
//!     element is inserted in declaration order and its transitions are collected as
//!     connectors. Elements without an outgoing transition are then joined to a single
//!     synthetic `END` node, so the graph has no dangling steps.
//! 3.  **Render**: Emit the graph through an `OutputFormat` backend, or call `to_mermaid`
//!     directly. Emission is deterministic: nodes follow element order, edges follow connector
//!     order.
//!
//! Any other source format can take part by implementing `IntoFlow`.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowviz::prelude::*;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
//! <Flow xmlns="http://soap.sforce.com/2006/04/metadata">
//!     <label>Greeting</label>
//!     <processType>Flow</processType>
//!     <start>
//!         <connector><targetReference>Welcome</targetReference></connector>
//!     </start>
//!     <screens>
//!         <name>Welcome</name>
//!         <label>Welcome</label>
//!     </screens>
//! </Flow>"#;
//!
//!     let raw = RawFlow::from_xml(xml)?;
//!     let flow = Compiler::builder(raw)
//!         .with_name("Greeting")
//!         .show_fault_paths(false)
//!         .build()
//!         .compile()?;
//!
//!     let markup = to_mermaid(&flow, DiagramOptions::default());
//!     assert!(markup.starts_with("flowchart TD"));
//!     assert!(markup.contains("START-->Welcome"));
//!     assert!(markup.contains("Welcome-->END"));
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod compiler;
pub mod error;
pub mod flow;
pub mod prelude;
pub mod render;
pub mod sanitize;
pub mod source;

use crate::compiler::Compiler;
use crate::error::FlowError;
use crate::render::DiagramOptions;
use crate::source::RawFlow;

/// Runs the whole pipeline on an in-memory document and returns the Mermaid markup.
pub fn flow_to_mermaid(xml: &str, options: DiagramOptions) -> Result<String, FlowError> {
    let raw = RawFlow::from_xml(xml)?;
    let flow = Compiler::builder(raw)
        .show_fault_paths(options.show_fault_paths)
        .build()
        .compile()?;
    Ok(render::to_mermaid(&flow, options))
}
