use crate::flow::{FlowConnector, FlowElement};

/// Accumulates the edges of a flow, one element at a time.
///
/// Fault transitions are a presentation choice: when `include_fault_paths` is off they are
/// dropped here and never reach the graph.
#[derive(Debug, Clone, Default)]
pub struct ConnectorCollector {
    include_fault_paths: bool,
    connectors: Vec<FlowConnector>,
}

impl ConnectorCollector {
    pub fn new(include_fault_paths: bool) -> Self {
        Self {
            include_fault_paths,
            connectors: Vec::new(),
        }
    }

    /// Appends every outgoing transition of `element`. Nothing is de-duplicated.
    pub fn collect(&mut self, element: &FlowElement) {
        let from = element.name.as_str();

        if let Some(target) = &element.connector {
            self.connectors.push(FlowConnector::plain(from, target));
        }

        if let Some(target) = &element.default_connector {
            self.connectors
                .push(FlowConnector::labeled(from, target, "Default"));
        }

        for rule in &element.rules {
            if let Some(target) = &rule.target {
                self.connectors
                    .push(FlowConnector::labeled(from, target, rule.display_label()));
            }
        }

        for event in &element.wait_events {
            if let Some(target) = &event.target {
                self.connectors
                    .push(FlowConnector::labeled(from, target, event.display_label()));
            }
        }

        if let Some(target) = &element.next_value_connector {
            self.connectors
                .push(FlowConnector::labeled(from, target, "Next Item"));
        }
        if let Some(target) = &element.no_more_values_connector {
            self.connectors.push(FlowConnector::labeled(from, target, "Done"));
        }

        for path in &element.scheduled_paths {
            if let Some(target) = &path.target {
                self.connectors
                    .push(FlowConnector::scheduled(from, target, path.display_label()));
            }
        }

        if self.include_fault_paths {
            if let Some(target) = &element.fault_connector {
                self.connectors.push(FlowConnector::fault(from, target));
            }
        }
    }

    pub fn connectors(&self) -> &[FlowConnector] {
        &self.connectors
    }

    pub fn len(&self) -> usize {
        self.connectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connectors.is_empty()
    }

    pub fn into_connectors(self) -> Vec<FlowConnector> {
        self.connectors
    }
}

/// Collects the outgoing transitions of a single element in isolation.
pub fn collect_connectors(element: &FlowElement, include_fault_paths: bool) -> Vec<FlowConnector> {
    let mut collector = ConnectorCollector::new(include_fault_paths);
    collector.collect(element);
    collector.into_connectors()
}
