//! Tests for deriving connectors from element transitions.
mod common;
use common::*;
use flowviz::compiler::collect_connectors;
use flowviz::prelude::*;

fn rule(name: &str, label: Option<&str>, target: &str) -> FlowRule {
    FlowRule {
        name: name.to_string(),
        label: label.map(str::to_string),
        target: Some(target.to_string()),
        ..FlowRule::default()
    }
}

#[test]
fn test_standard_connector_is_unlabeled() {
    let element = FlowElement::new("Assign", ElementType::Assignment).with_connector("Next");
    let connectors = collect_connectors(&element, false);
    assert_eq!(connectors, vec![FlowConnector::plain("Assign", "Next")]);
}

#[test]
fn test_terminal_element_yields_nothing() {
    let element = FlowElement::new("Done", ElementType::Screen);
    assert!(collect_connectors(&element, true).is_empty());
}

#[test]
fn test_decision_default_and_rules() {
    let element = FlowElement::new("Check", ElementType::Decision)
        .with_default_connector("Fallback")
        .with_rule(rule("Is_VIP", Some("Is VIP"), "Upgrade"))
        .with_rule(rule("Is_New", None, "Onboard"));

    let connectors = collect_connectors(&element, false);
    assert_eq!(
        connectors,
        vec![
            FlowConnector::labeled("Check", "Fallback", "Default"),
            FlowConnector::labeled("Check", "Upgrade", "Is VIP"),
            FlowConnector::labeled("Check", "Onboard", "Is_New"),
        ]
    );
}

#[test]
fn test_rules_without_target_are_skipped() {
    let element = FlowElement::new("Check", ElementType::Decision).with_rule(FlowRule {
        name: "Dead_End".to_string(),
        ..FlowRule::default()
    });
    assert!(collect_connectors(&element, false).is_empty());
}

#[test]
fn test_same_target_is_not_deduplicated() {
    let element = FlowElement::new("Check", ElementType::Decision)
        .with_default_connector("Same")
        .with_rule(rule("Yes", None, "Same"));

    let connectors = collect_connectors(&element, false);
    assert_eq!(connectors.len(), 2);
    assert!(connectors.iter().all(|c| c.to == "Same"));
}

#[test]
fn test_wait_events_use_label_or_name() {
    let flow = compile_xml(WAIT_XML, false);
    let hold: Vec<_> = flow
        .outgoing("Hold")
        .map(|c| (c.label.clone().unwrap_or_default(), c.to.clone()))
        .collect();
    assert_eq!(
        hold,
        vec![
            ("Default".to_string(), "Timed_Out".to_string()),
            ("On Approval".to_string(), "Approved".to_string()),
            ("Reminder".to_string(), "Timed_Out".to_string()),
        ]
    );
}

#[test]
fn test_loop_yields_next_item_and_done_edges() {
    let flow = compile_xml(LOOP_XML, false);
    let outgoing: Vec<&FlowConnector> = flow.outgoing("Each_Contact").collect();

    assert_eq!(outgoing.len(), 2);
    assert_eq!(outgoing[0].label.as_deref(), Some("Next Item"));
    assert_eq!(outgoing[1].label.as_deref(), Some("Done"));
    assert!(outgoing.iter().all(|c| c.to == "Touch"));
}

#[test]
fn test_scheduled_paths_are_flagged() {
    let flow = compile_xml(SCHEDULED_XML, false);
    let from_start: Vec<&FlowConnector> = flow.outgoing(START_NAME).collect();

    assert_eq!(from_start.len(), 3);
    assert!(!from_start[0].is_scheduled);
    assert_eq!(from_start[0].to, "Stamp");

    assert_eq!(
        *from_start[1],
        FlowConnector::scheduled(START_NAME, "Send_Reminder", "One Day Later")
    );
    assert_eq!(
        *from_start[2],
        FlowConnector::scheduled(START_NAME, "Escalate", "Week_Later")
    );
}

#[test]
fn test_fault_paths_only_when_requested() {
    let element = FlowElement::new("Create_Case", ElementType::RecordCreate)
        .with_connector("Close_Case")
        .with_fault_connector("Report_Failure");

    let without = collect_connectors(&element, false);
    assert_eq!(without, vec![FlowConnector::plain("Create_Case", "Close_Case")]);

    let with = collect_connectors(&element, true);
    assert_eq!(with.len(), 2);
    assert_eq!(with[1], FlowConnector::fault("Create_Case", "Report_Failure"));
    assert!(with[1].is_fault);
    assert_eq!(with[1].label.as_deref(), Some("Fault"));
}

#[test]
fn test_fault_gating_over_whole_flow() {
    let hidden = compile_xml(FAULT_XML, false);
    assert!(hidden.connectors.iter().all(|c| !c.is_fault));

    let shown = compile_xml(FAULT_XML, true);
    let faults: Vec<&str> = shown
        .connectors
        .iter()
        .filter(|c| c.is_fault)
        .map(|c| c.from.as_str())
        .collect();
    // One fault edge per element with a fault connector.
    assert_eq!(faults, vec!["Create_Case", "Close_Case"]);
}

#[test]
fn test_collector_accumulates_across_elements() {
    let mut collector = ConnectorCollector::new(false);
    assert!(collector.is_empty());

    collector.collect(&FlowElement::new("A", ElementType::Step).with_connector("B"));
    collector.collect(&FlowElement::new("B", ElementType::Step).with_connector("C"));
    collector.collect(&FlowElement::new("C", ElementType::Step));

    assert_eq!(collector.len(), 2);
    assert_eq!(collector.connectors()[1], FlowConnector::plain("B", "C"));
}
