use super::{FlowConnector, FlowElement};
use indexmap::IndexMap;
use serde::Serialize;

/// Reserved element-map key of the entry point.
pub const START_NAME: &str = "START";

/// Element-map key of the synthetic terminus added by terminal synthesis.
pub const END_NAME: &str = "END";

/// A variable declared by the flow. Carried as metadata only; the graph never uses it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FlowVariable {
    pub name: String,
    pub data_type: Option<String>,
    pub object_type: Option<String>,
    pub description: Option<String>,
    pub is_input: bool,
    pub is_output: bool,
    pub is_collection: bool,
}

/// The complete flow graph, ready to be rendered.
///
/// `elements` keeps source declaration order, which is also the order nodes are emitted in.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedFlow {
    pub name: String,
    pub label: String,
    pub description: Option<String>,
    pub process_type: String,
    pub status: Option<String>,
    pub elements: IndexMap<String, FlowElement>,
    pub connectors: Vec<FlowConnector>,
    pub variables: Vec<FlowVariable>,
}

impl ParsedFlow {
    /// The entry element, if the source declared one.
    pub fn start(&self) -> Option<&FlowElement> {
        self.elements.get(START_NAME)
    }

    pub fn element(&self, name: &str) -> Option<&FlowElement> {
        self.elements.get(name)
    }

    /// Connectors leaving the given element, in emission order.
    pub fn outgoing<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a FlowConnector> + 'a {
        self.connectors.iter().filter(move |c| c.from == name)
    }

    /// Connectors arriving at the given element, in emission order.
    pub fn incoming<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a FlowConnector> + 'a {
        self.connectors.iter().filter(move |c| c.to == name)
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty() && self.connectors.is_empty()
    }
}
