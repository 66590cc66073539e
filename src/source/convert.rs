use super::raw::{
    RawCondition, RawConnector, RawElement, RawFlow, RawRule, RawScheduledPath, RawStart,
    RawVariable, RawWaitEvent,
};
use crate::compiler::{FlowAssembler, FlowHeader};
use crate::error::ConversionError;
use crate::flow::{
    ElementType, FlowCondition, FlowElement, FlowRule, FlowScheduledPath, FlowVariable,
    FlowWaitEvent, IntoFlow, START_NAME, StartTrigger,
};
use tracing::warn;

impl IntoFlow for RawFlow {
    fn into_flow(mut self, assembler: &mut FlowAssembler) -> Result<(), ConversionError> {
        assembler.set_header(FlowHeader {
            label: text(self.label.take()),
            description: text(self.description.take()),
            process_type: text(self.process_type.take()),
            status: text(self.status.take()),
        });

        for variable in std::mem::take(&mut self.variables) {
            match convert_variable(variable) {
                Some(variable) => assembler.add_variable(variable),
                None => warn!("skipping variable without a name"),
            }
        }

        if let Some(start) = self.take_start() {
            assembler.add_element(start);
        }

        for (element_type, blocks) in self.take_element_groups() {
            for block in blocks {
                match convert_element(block, element_type) {
                    Some(element) => assembler.add_element(element),
                    None => warn!(element_type = %element_type, "skipping element without a name"),
                }
            }
        }

        Ok(())
    }
}

impl RawFlow {
    /// Builds the entry element from `<start>`, or from a bare `startElementReference` in
    /// documents that predate the start block.
    fn take_start(&mut self) -> Option<FlowElement> {
        let legacy_reference = text(self.start_element_reference.take());
        match self.start.take() {
            Some(start) => Some(convert_start(start)),
            None => legacy_reference.map(|target| {
                FlowElement::new(START_NAME, ElementType::Start)
                    .with_label("Start")
                    .with_connector(target)
            }),
        }
    }
}

fn convert_start(start: RawStart) -> FlowElement {
    let RawStart {
        connector,
        scheduled_paths,
        trigger_type,
        object,
        record_trigger_type,
    } = start;

    let mut element = FlowElement::new(START_NAME, ElementType::Start).with_label("Start");
    element.connector = target(connector);
    element.scheduled_paths = scheduled_paths.into_iter().map(convert_scheduled_path).collect();
    element.trigger = Some(StartTrigger {
        trigger_type: text(trigger_type),
        object: text(object),
        record_trigger_type: text(record_trigger_type),
    });
    element
}

fn convert_element(block: RawElement, element_type: ElementType) -> Option<FlowElement> {
    let name = text(block.name)?;
    let mut element = FlowElement::new(name, element_type);
    element.label = text(block.label);
    element.description = text(block.description);
    element.connector = target(block.connector);
    element.fault_connector = target(block.fault_connector);
    element.default_connector = target(block.default_connector);
    element.default_connector_label = text(block.default_connector_label);
    element.next_value_connector = target(block.next_value_connector);
    element.no_more_values_connector = target(block.no_more_values_connector);

    // Branch lists only carry meaning on the element types that own them.
    if element_type == ElementType::Decision {
        element.rules = block.rules.into_iter().map(convert_rule).collect();
    }
    if element_type == ElementType::Wait {
        element.wait_events = block.wait_events.into_iter().map(convert_wait_event).collect();
    }

    Some(element)
}

fn convert_rule(rule: RawRule) -> FlowRule {
    FlowRule {
        name: text(rule.name).unwrap_or_default(),
        label: text(rule.label),
        condition_logic: text(rule.condition_logic),
        conditions: rule.conditions.into_iter().map(convert_condition).collect(),
        target: target(rule.connector),
    }
}

fn convert_wait_event(event: RawWaitEvent) -> FlowWaitEvent {
    FlowWaitEvent {
        name: text(event.name).unwrap_or_default(),
        label: text(event.label),
        event_type: text(event.event_type),
        condition_logic: text(event.condition_logic),
        conditions: event.conditions.into_iter().map(convert_condition).collect(),
        target: target(event.connector),
    }
}

fn convert_scheduled_path(path: RawScheduledPath) -> FlowScheduledPath {
    FlowScheduledPath {
        name: text(path.name).unwrap_or_default(),
        label: text(path.label),
        offset_number: path.offset_number,
        offset_unit: text(path.offset_unit),
        time_source: text(path.time_source),
        path_type: text(path.path_type),
        target: target(path.connector),
    }
}

fn convert_condition(condition: RawCondition) -> FlowCondition {
    FlowCondition {
        left_value_reference: text(condition.left_value_reference),
        operator: text(condition.operator),
        right_value: condition.right_value.and_then(|v| text(v.into_display())),
    }
}

fn convert_variable(variable: RawVariable) -> Option<FlowVariable> {
    Some(FlowVariable {
        name: text(variable.name)?,
        data_type: text(variable.data_type),
        object_type: text(variable.object_type),
        description: text(variable.description),
        is_input: variable.is_input,
        is_output: variable.is_output,
        is_collection: variable.is_collection,
    })
}

/// Trims a text node and treats an empty one as absent.
fn text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn target(connector: Option<RawConnector>) -> Option<String> {
    text(connector.and_then(|c| c.target_reference))
}
