use crate::error::FlowError;
use crate::flow::{IntoFlow, ParsedFlow};
use tracing::debug;

mod assembler;
pub mod collector;
pub mod synthesis;

pub use assembler::{FlowAssembler, FlowHeader};
pub use collector::{ConnectorCollector, collect_connectors};
pub use synthesis::{SynthesisReport, synthesize_terminals};

/// Turns a flow source into a complete, renderable `ParsedFlow`.
pub struct Compiler<S> {
    source: S,
    name: Option<String>,
    include_fault_paths: bool,
}

pub struct CompilerBuilder<S> {
    source: S,
    name: Option<String>,
    include_fault_paths: bool,
}

impl<S: IntoFlow> CompilerBuilder<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            name: None,
            include_fault_paths: false,
        }
    }

    /// Sets the flow's API name. Sources rarely carry it; it usually comes from the file name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Keeps fault transitions as edges of the graph.
    pub fn show_fault_paths(mut self, show: bool) -> Self {
        self.include_fault_paths = show;
        self
    }

    pub fn build(self) -> Compiler<S> {
        Compiler {
            source: self.source,
            name: self.name,
            include_fault_paths: self.include_fault_paths,
        }
    }
}

impl<S: IntoFlow> Compiler<S> {
    pub fn builder(source: S) -> CompilerBuilder<S> {
        CompilerBuilder::new(source)
    }

    pub fn compile(self) -> Result<ParsedFlow, FlowError> {
        let mut assembler = FlowAssembler::new(self.include_fault_paths);
        self.source.into_flow(&mut assembler)?;
        debug!(
            elements = assembler.element_count(),
            connectors = assembler.connector_count(),
            "assembled flow graph"
        );

        let mut flow = assembler.finish(self.name);
        let report = synthesize_terminals(&mut flow);
        debug!(
            flow = %flow.name,
            end_added = report.end_added,
            terminal_edges = report.terminal_edges,
            retargeted = report.retargeted,
            "synthesized terminal nodes"
        );

        Ok(flow)
    }
}
