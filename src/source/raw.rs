//! Serde mirror of the flow metadata XML.
//!
//! Every tag that may repeat is a `Vec` with `#[serde(default)]`. The XML deserializer maps a
//! lone occurrence and a run of occurrences to the same list, so nothing downstream has to
//! guess between "one object" and "a list of one".

use crate::flow::ElementType;
use serde::Deserialize;

/// `<connector>`-shaped transition: only the target is relevant for the graph.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConnector {
    pub target_reference: Option<String>,
}

/// A typed literal or reference, e.g. `<rightValue><stringValue>VIP</stringValue></rightValue>`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawValue {
    pub string_value: Option<String>,
    pub number_value: Option<String>,
    pub boolean_value: Option<String>,
    pub date_value: Option<String>,
    pub date_time_value: Option<String>,
    pub element_reference: Option<String>,
}

impl RawValue {
    /// The first populated representation, in the order the platform checks them.
    pub fn into_display(self) -> Option<String> {
        self.element_reference
            .or(self.string_value)
            .or(self.number_value)
            .or(self.boolean_value)
            .or(self.date_time_value)
            .or(self.date_value)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCondition {
    pub left_value_reference: Option<String>,
    pub operator: Option<String>,
    pub right_value: Option<RawValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRule {
    pub name: Option<String>,
    pub label: Option<String>,
    pub condition_logic: Option<String>,
    #[serde(default)]
    pub conditions: Vec<RawCondition>,
    pub connector: Option<RawConnector>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawWaitEvent {
    pub name: Option<String>,
    pub label: Option<String>,
    pub event_type: Option<String>,
    pub condition_logic: Option<String>,
    #[serde(default)]
    pub conditions: Vec<RawCondition>,
    pub connector: Option<RawConnector>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawScheduledPath {
    pub name: Option<String>,
    pub label: Option<String>,
    pub offset_number: Option<i64>,
    pub offset_unit: Option<String>,
    pub time_source: Option<String>,
    pub path_type: Option<String>,
    pub connector: Option<RawConnector>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStart {
    pub connector: Option<RawConnector>,
    #[serde(default)]
    pub scheduled_paths: Vec<RawScheduledPath>,
    pub trigger_type: Option<String>,
    pub object: Option<String>,
    pub record_trigger_type: Option<String>,
}

/// One step block. All step tags share this shape; fields a tag never uses stay empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawElement {
    pub name: Option<String>,
    pub label: Option<String>,
    pub description: Option<String>,
    pub connector: Option<RawConnector>,
    pub fault_connector: Option<RawConnector>,
    pub default_connector: Option<RawConnector>,
    pub default_connector_label: Option<String>,
    #[serde(default)]
    pub rules: Vec<RawRule>,
    #[serde(default)]
    pub wait_events: Vec<RawWaitEvent>,
    pub next_value_connector: Option<RawConnector>,
    pub no_more_values_connector: Option<RawConnector>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVariable {
    pub name: Option<String>,
    pub data_type: Option<String>,
    pub object_type: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub is_input: bool,
    #[serde(default)]
    pub is_output: bool,
    #[serde(default)]
    pub is_collection: bool,
}

/// Defines `RawFlow` with one list field per step tag, the ordered tag table, and the
/// accessor that drains the lists in table order.
macro_rules! define_element_tags {
    ( $( ($field:ident, $tag:literal, $element_type:path) ),* $(,)? ) => {
        /// The `<Flow>` root of a flow metadata document.
        #[derive(Debug, Clone, Default, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct RawFlow {
            pub label: Option<String>,
            pub description: Option<String>,
            pub process_type: Option<String>,
            pub status: Option<String>,
            pub start: Option<RawStart>,
            pub start_element_reference: Option<String>,
            #[serde(default)]
            pub variables: Vec<RawVariable>,
            $(
                #[serde(rename = $tag, default)]
                pub $field: Vec<RawElement>,
            )*
        }

        /// Step tags and the element type each one produces, in reading order.
        pub const ELEMENT_TAGS: &[(&str, ElementType)] = &[ $( ($tag, $element_type) ),* ];

        impl RawFlow {
            /// Drains every step list, pairing it with its element type.
            pub fn take_element_groups(&mut self) -> Vec<(ElementType, Vec<RawElement>)> {
                vec![ $( ($element_type, std::mem::take(&mut self.$field)) ),* ]
            }

            pub fn element_block_count(&self) -> usize {
                0 $( + self.$field.len() )*
            }
        }
    };
}

define_element_tags! {
    (decisions, "decisions", ElementType::Decision),
    (screens, "screens", ElementType::Screen),
    (record_creates, "recordCreates", ElementType::RecordCreate),
    (record_updates, "recordUpdates", ElementType::RecordUpdate),
    (record_deletes, "recordDeletes", ElementType::RecordDelete),
    (record_lookups, "recordLookups", ElementType::RecordLookup),
    (record_rollbacks, "recordRollbacks", ElementType::RecordRollback),
    (assignments, "assignments", ElementType::Assignment),
    (loops, "loops", ElementType::Loop),
    (subflows, "subflows", ElementType::Subflow),
    (action_calls, "actionCalls", ElementType::Action),
    (apex_plugin_calls, "apexPluginCalls", ElementType::Apex),
    (collection_processors, "collectionProcessors", ElementType::Collection),
    (waits, "waits", ElementType::Wait),
    (custom_errors, "customErrors", ElementType::CustomError),
    (transforms, "transforms", ElementType::Transform),
    (orchestrated_stages, "orchestratedStages", ElementType::OrchestratedStage),
    (steps, "steps", ElementType::Step),
}
