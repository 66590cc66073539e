use super::collector::ConnectorCollector;
use crate::flow::{FlowElement, FlowVariable, ParsedFlow};
use indexmap::IndexMap;
use tracing::warn;

/// Flow-level metadata declared next to the elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowHeader {
    pub label: Option<String>,
    pub description: Option<String>,
    pub process_type: Option<String>,
    pub status: Option<String>,
}

/// Builds a `ParsedFlow` incrementally: every element added is handed to the connector
/// collector right away, so the edge list grows in element declaration order.
#[derive(Debug, Default)]
pub struct FlowAssembler {
    header: FlowHeader,
    elements: IndexMap<String, FlowElement>,
    variables: Vec<FlowVariable>,
    collector: ConnectorCollector,
}

impl FlowAssembler {
    pub fn new(include_fault_paths: bool) -> Self {
        Self {
            collector: ConnectorCollector::new(include_fault_paths),
            ..Self::default()
        }
    }

    pub fn set_header(&mut self, header: FlowHeader) {
        self.header = header;
    }

    /// Inserts an element and collects its outgoing connectors.
    ///
    /// A repeated name replaces the earlier element in place; the connectors already collected
    /// for it stay.
    pub fn add_element(&mut self, element: FlowElement) {
        self.collector.collect(&element);
        if let Some(previous) = self.elements.insert(element.name.clone(), element) {
            warn!(
                name = %previous.name,
                "element name declared more than once, keeping the last declaration"
            );
        }
    }

    pub fn add_variable(&mut self, variable: FlowVariable) {
        self.variables.push(variable);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.elements.contains_key(name)
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn connector_count(&self) -> usize {
        self.collector.len()
    }

    /// Closes the assembly. The flow name falls back to the label, then to `"Flow"`.
    pub fn finish(self, name: Option<String>) -> ParsedFlow {
        let FlowHeader {
            label,
            description,
            process_type,
            status,
        } = self.header;

        let name = name
            .or_else(|| label.clone())
            .unwrap_or_else(|| "Flow".to_string());
        let label = label.unwrap_or_else(|| name.clone());

        ParsedFlow {
            name,
            label,
            description,
            process_type: process_type.unwrap_or_else(|| "Flow".to_string()),
            status,
            elements: self.elements,
            connectors: self.collector.into_connectors(),
            variables: self.variables,
        }
    }
}
