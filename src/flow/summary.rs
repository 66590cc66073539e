use super::{ElementType, ParsedFlow};
use indexmap::IndexMap;
use serde::Serialize;

/// Aggregate counts over a parsed flow, used for logging and documentation output.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FlowSummary {
    /// Element count per type, in order of first appearance.
    pub element_counts: IndexMap<ElementType, usize>,
    pub element_total: usize,
    pub connector_total: usize,
    pub fault_connectors: usize,
    pub scheduled_connectors: usize,
    pub variable_total: usize,
}

impl ParsedFlow {
    pub fn summary(&self) -> FlowSummary {
        let mut element_counts = IndexMap::new();
        for element in self.elements.values() {
            *element_counts.entry(element.element_type).or_insert(0) += 1;
        }

        FlowSummary {
            element_counts,
            element_total: self.elements.len(),
            connector_total: self.connectors.len(),
            fault_connectors: self.connectors.iter().filter(|c| c.is_fault).count(),
            scheduled_connectors: self.connectors.iter().filter(|c| c.is_scheduled).count(),
            variable_total: self.variables.len(),
        }
    }
}
