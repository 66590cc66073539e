use serde::Serialize;
use std::fmt;

/// The closed set of step kinds a flow can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementType {
    Start,
    Decision,
    Screen,
    RecordCreate,
    RecordUpdate,
    RecordDelete,
    RecordLookup,
    RecordRollback,
    Assignment,
    Loop,
    Subflow,
    Action,
    Apex,
    Collection,
    Wait,
    CustomError,
    Transform,
    OrchestratedStage,
    Step,
    End,
}

impl ElementType {
    pub const ALL: [ElementType; 20] = [
        ElementType::Start,
        ElementType::Decision,
        ElementType::Screen,
        ElementType::RecordCreate,
        ElementType::RecordUpdate,
        ElementType::RecordDelete,
        ElementType::RecordLookup,
        ElementType::RecordRollback,
        ElementType::Assignment,
        ElementType::Loop,
        ElementType::Subflow,
        ElementType::Action,
        ElementType::Apex,
        ElementType::Collection,
        ElementType::Wait,
        ElementType::CustomError,
        ElementType::Transform,
        ElementType::OrchestratedStage,
        ElementType::Step,
        ElementType::End,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Start => "start",
            ElementType::Decision => "decision",
            ElementType::Screen => "screen",
            ElementType::RecordCreate => "recordCreate",
            ElementType::RecordUpdate => "recordUpdate",
            ElementType::RecordDelete => "recordDelete",
            ElementType::RecordLookup => "recordLookup",
            ElementType::RecordRollback => "recordRollback",
            ElementType::Assignment => "assignment",
            ElementType::Loop => "loop",
            ElementType::Subflow => "subflow",
            ElementType::Action => "action",
            ElementType::Apex => "apex",
            ElementType::Collection => "collection",
            ElementType::Wait => "wait",
            ElementType::CustomError => "customError",
            ElementType::Transform => "transform",
            ElementType::OrchestratedStage => "orchestratedStage",
            ElementType::Step => "step",
            ElementType::End => "end",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single comparison inside a decision rule or wait event.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FlowCondition {
    pub left_value_reference: Option<String>,
    pub operator: Option<String>,
    pub right_value: Option<String>,
}

/// A named branch of a decision element.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FlowRule {
    pub name: String,
    pub label: Option<String>,
    pub condition_logic: Option<String>,
    pub conditions: Vec<FlowCondition>,
    pub target: Option<String>,
}

/// A named resume path of a wait element.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FlowWaitEvent {
    pub name: String,
    pub label: Option<String>,
    pub event_type: Option<String>,
    pub condition_logic: Option<String>,
    pub conditions: Vec<FlowCondition>,
    pub target: Option<String>,
}

/// A time-based entry path declared on the start element.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FlowScheduledPath {
    pub name: String,
    pub label: Option<String>,
    pub offset_number: Option<i64>,
    pub offset_unit: Option<String>,
    pub time_source: Option<String>,
    pub path_type: Option<String>,
    pub target: Option<String>,
}

impl FlowRule {
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

impl FlowWaitEvent {
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

impl FlowScheduledPath {
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

/// What causes the flow to run, as declared on its start element.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StartTrigger {
    pub trigger_type: Option<String>,
    pub object: Option<String>,
    pub record_trigger_type: Option<String>,
}

/// One processing step of a flow.
///
/// Only the transition fields that make sense for `element_type` are expected to be set, but
/// none of them are required: an element without any transition is a terminal step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowElement {
    pub name: String,
    pub label: Option<String>,
    pub description: Option<String>,
    pub element_type: ElementType,
    pub connector: Option<String>,
    pub fault_connector: Option<String>,
    pub default_connector: Option<String>,
    pub default_connector_label: Option<String>,
    pub rules: Vec<FlowRule>,
    pub wait_events: Vec<FlowWaitEvent>,
    pub next_value_connector: Option<String>,
    pub no_more_values_connector: Option<String>,
    pub scheduled_paths: Vec<FlowScheduledPath>,
    pub trigger: Option<StartTrigger>,
}

impl FlowElement {
    pub fn new(name: impl Into<String>, element_type: ElementType) -> Self {
        Self {
            name: name.into(),
            label: None,
            description: None,
            element_type,
            connector: None,
            fault_connector: None,
            default_connector: None,
            default_connector_label: None,
            rules: Vec::new(),
            wait_events: Vec::new(),
            next_value_connector: None,
            no_more_values_connector: None,
            scheduled_paths: Vec::new(),
            trigger: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_connector(mut self, target: impl Into<String>) -> Self {
        self.connector = Some(target.into());
        self
    }

    pub fn with_fault_connector(mut self, target: impl Into<String>) -> Self {
        self.fault_connector = Some(target.into());
        self
    }

    pub fn with_default_connector(mut self, target: impl Into<String>) -> Self {
        self.default_connector = Some(target.into());
        self
    }

    pub fn with_rule(mut self, rule: FlowRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn with_wait_event(mut self, event: FlowWaitEvent) -> Self {
        self.wait_events.push(event);
        self
    }

    pub fn with_loop_connectors(
        mut self,
        next_value: Option<String>,
        no_more_values: Option<String>,
    ) -> Self {
        self.next_value_connector = next_value;
        self.no_more_values_connector = no_more_values;
        self
    }

    pub fn with_scheduled_path(mut self, path: FlowScheduledPath) -> Self {
        self.scheduled_paths.push(path);
        self
    }

    /// The text shown for this element, falling back to its name.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}
