use super::DiagramOptions;
use crate::backend::DiagramBackend;
use crate::error::RenderError;
use crate::flow::{ElementType, ParsedFlow};
use crate::sanitize::{find_id_collisions, sanitize_id, sanitize_label};
use itertools::Itertools;
use std::fmt;
use tracing::{debug, warn};

/// First line of every emitted diagram.
pub const HEADER: &str = "flowchart TD";

/// Opening and closing delimiters of a Mermaid node shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeShape {
    pub open: &'static str,
    pub close: &'static str,
}

const fn shape(open: &'static str, close: &'static str) -> NodeShape {
    NodeShape { open, close }
}

/// Plain box, used by steps without a more specific shape.
pub const BOX_SHAPE: NodeShape = shape("[", "]");

/// Node shape for each element type.
pub fn node_shape(element_type: ElementType) -> NodeShape {
    match element_type {
        ElementType::Start => shape("([", "])"),
        ElementType::End => shape("((", "))"),
        ElementType::Decision => shape("{", "}"),
        ElementType::Screen => shape("[/", "/]"),
        ElementType::RecordCreate => shape("[(", ")]"),
        ElementType::RecordUpdate => shape("[(", ")]"),
        ElementType::RecordDelete => shape("[(", ")]"),
        ElementType::RecordLookup => shape("[(", ")]"),
        ElementType::RecordRollback => shape("[(", ")]"),
        ElementType::Assignment => BOX_SHAPE,
        ElementType::Loop => shape("{{", "}}"),
        ElementType::Subflow => shape("[[", "]]"),
        ElementType::Action => shape(">", "]"),
        ElementType::Apex => shape(">", "]"),
        ElementType::Collection => shape("[\\", "\\]"),
        ElementType::Wait => shape("(", ")"),
        ElementType::CustomError => shape("[/", "\\]"),
        ElementType::Transform => shape("[\\", "/]"),
        ElementType::OrchestratedStage => shape("[[", "]]"),
        ElementType::Step => BOX_SHAPE,
    }
}

/// Semantic colour categories, in the order their `classDef` lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleClass {
    StartEnd,
    Decision,
    Screen,
    RecordOperation,
    Action,
    Loop,
    Wait,
    Subflow,
    Error,
}

impl StyleClass {
    pub const ALL: [StyleClass; 9] = [
        StyleClass::StartEnd,
        StyleClass::Decision,
        StyleClass::Screen,
        StyleClass::RecordOperation,
        StyleClass::Action,
        StyleClass::Loop,
        StyleClass::Wait,
        StyleClass::Subflow,
        StyleClass::Error,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StyleClass::StartEnd => "startEnd",
            StyleClass::Decision => "decision",
            StyleClass::Screen => "screen",
            StyleClass::RecordOperation => "recordOperation",
            StyleClass::Action => "action",
            StyleClass::Loop => "loop",
            StyleClass::Wait => "wait",
            StyleClass::Subflow => "subflow",
            StyleClass::Error => "error",
        }
    }

    pub fn definition(&self) -> &'static str {
        match self {
            StyleClass::StartEnd => "fill:#d4edda,stroke:#28a745,stroke-width:2px",
            StyleClass::Decision => "fill:#fff3cd,stroke:#ffc107,stroke-width:2px",
            StyleClass::Screen => "fill:#cce5ff,stroke:#004085,stroke-width:2px",
            StyleClass::RecordOperation => "fill:#e2d9f3,stroke:#6f42c1,stroke-width:2px",
            StyleClass::Action => "fill:#d1ecf1,stroke:#17a2b8,stroke-width:2px",
            StyleClass::Loop => "fill:#ffe5d0,stroke:#fd7e14,stroke-width:2px",
            StyleClass::Wait => "fill:#e9ecef,stroke:#6c757d,stroke-width:2px",
            StyleClass::Subflow => "fill:#d6f5f5,stroke:#20c997,stroke-width:2px",
            StyleClass::Error => "fill:#f8d7da,stroke:#dc3545,stroke-width:2px",
        }
    }
}

/// Style category of an element type; `None` leaves the node unstyled.
pub fn style_class(element_type: ElementType) -> Option<StyleClass> {
    match element_type {
        ElementType::Start | ElementType::End => Some(StyleClass::StartEnd),
        ElementType::Decision => Some(StyleClass::Decision),
        ElementType::Screen => Some(StyleClass::Screen),
        ElementType::RecordCreate
        | ElementType::RecordUpdate
        | ElementType::RecordDelete
        | ElementType::RecordLookup
        | ElementType::RecordRollback => Some(StyleClass::RecordOperation),
        ElementType::Action | ElementType::Apex => Some(StyleClass::Action),
        ElementType::Loop => Some(StyleClass::Loop),
        ElementType::Wait => Some(StyleClass::Wait),
        ElementType::Subflow | ElementType::OrchestratedStage => Some(StyleClass::Subflow),
        ElementType::CustomError => Some(StyleClass::Error),
        ElementType::Assignment
        | ElementType::Collection
        | ElementType::Transform
        | ElementType::Step => None,
    }
}

/// A wrapper to pretty-print a flow as Mermaid flowchart markup.
///
/// Nodes and edges are written in element-map and connector-list order, so the same flow always
/// produces the same text.
pub struct MermaidDiagram<'a> {
    pub flow: &'a ParsedFlow,
    pub options: DiagramOptions,
}

impl fmt::Display for MermaidDiagram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", HEADER)?;

        for element in self.flow.elements.values() {
            let shape = node_shape(element.element_type);
            let text = if self.options.include_labels {
                element.display_label()
            } else {
                element.name.as_str()
            };
            writeln!(
                f,
                "    {}{}{}{}",
                sanitize_id(&element.name),
                shape.open,
                sanitize_label(text),
                shape.close
            )?;
        }

        writeln!(f)?;
        for connector in &self.flow.connectors {
            let arrow = if connector.is_fault && self.options.show_fault_paths {
                "-.->"
            } else if connector.is_scheduled {
                "==>"
            } else {
                "-->"
            };
            let from = sanitize_id(&connector.from);
            let to = sanitize_id(&connector.to);
            match connector.label.as_deref().filter(|l| !l.is_empty()) {
                Some(label) => writeln!(f, "    {}{}|{}|{}", from, arrow, sanitize_label(label), to)?,
                None => writeln!(f, "    {}{}{}", from, arrow, to)?,
            }
        }

        writeln!(f)?;
        writeln!(f, "    %% Styling")?;
        for class in StyleClass::ALL {
            writeln!(f, "    classDef {} {}", class.name(), class.definition())?;
        }
        for element in self.flow.elements.values() {
            if let Some(class) = style_class(element.element_type) {
                writeln!(f, "    class {} {}", sanitize_id(&element.name), class.name())?;
            }
        }
        Ok(())
    }
}

/// Emits the Mermaid markup of a flow, warning about node identifiers that collide.
pub fn to_mermaid(flow: &ParsedFlow, options: DiagramOptions) -> String {
    for collision in find_id_collisions(flow.elements.keys().map(String::as_str)) {
        warn!(
            id = %collision.id,
            names = %collision.names.iter().join(", "),
            "element names collide after sanitization, their nodes will be merged"
        );
    }

    let markup = MermaidDiagram { flow, options }.to_string();
    debug!(
        flow = %flow.name,
        nodes = flow.elements.len(),
        edges = flow.connectors.len(),
        bytes = markup.len(),
        "emitted mermaid diagram"
    );
    markup
}

/// Raw Mermaid markup output.
pub struct MermaidBackend {
    options: DiagramOptions,
}

impl MermaidBackend {
    pub fn new(options: DiagramOptions) -> Self {
        Self { options }
    }
}

impl DiagramBackend for MermaidBackend {
    fn render(&self, flow: &ParsedFlow) -> Result<String, RenderError> {
        Ok(to_mermaid(flow, self.options))
    }
}
