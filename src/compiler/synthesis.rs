use crate::flow::{ElementType, END_NAME, FlowConnector, FlowElement, ParsedFlow, START_NAME};
use ahash::AHashSet;
use tracing::warn;

/// What a synthesis pass changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SynthesisReport {
    /// Whether the shared end node was inserted by this pass.
    pub end_added: bool,
    /// Connectors added from dangling elements to the end node.
    pub terminal_edges: usize,
    /// Connectors whose unknown target was redirected to the end node.
    pub retargeted: usize,
}

impl SynthesisReport {
    pub fn is_noop(&self) -> bool {
        !self.end_added && self.terminal_edges == 0 && self.retargeted == 0
    }
}

/// Gives every element of the flow a visible terminus.
///
/// Connectors that point at an element the flow does not declare are redirected to the shared
/// end node, and every element without an outgoing connector (except the start) gets one plain
/// connector to it. The end node is added at most once, so running this twice is a no-op.
pub fn synthesize_terminals(flow: &mut ParsedFlow) -> SynthesisReport {
    let mut report = SynthesisReport::default();

    let unresolved: Vec<usize> = flow
        .connectors
        .iter()
        .enumerate()
        .filter(|(_, c)| !flow.elements.contains_key(&c.to))
        .map(|(i, _)| i)
        .collect();
    for index in unresolved {
        report.end_added |= ensure_end_node(flow);
        let connector = &mut flow.connectors[index];
        warn!(
            from = %connector.from,
            target = %connector.to,
            "connector targets an undeclared element, redirecting to {}",
            END_NAME
        );
        connector.to = END_NAME.to_string();
        report.retargeted += 1;
    }

    let sources: AHashSet<&str> = flow.connectors.iter().map(|c| c.from.as_str()).collect();
    let dangling: Vec<String> = flow
        .elements
        .keys()
        .filter(|name| name.as_str() != START_NAME && name.as_str() != END_NAME)
        .filter(|name| !sources.contains(name.as_str()))
        .cloned()
        .collect();

    for name in dangling {
        report.end_added |= ensure_end_node(flow);
        flow.connectors.push(FlowConnector::plain(name, END_NAME));
        report.terminal_edges += 1;
    }

    report
}

/// Inserts the synthetic end node unless an element already holds its name.
fn ensure_end_node(flow: &mut ParsedFlow) -> bool {
    if flow.elements.contains_key(END_NAME) {
        return false;
    }
    flow.elements.insert(
        END_NAME.to_string(),
        FlowElement::new(END_NAME, ElementType::End).with_label("End"),
    );
    true
}
