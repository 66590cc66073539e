//! Common test fixtures: flow metadata documents and pipeline helpers.
use flowviz::prelude::*;

/// Start -> screen `Welcome` -> decision `Check` with rule `Is VIP` -> record update `Upgrade`.
///
/// `Upgrade` declares no transition and the decision has no default path.
#[allow(dead_code)]
pub const TIERING_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Flow xmlns="http://soap.sforce.com/2006/04/metadata">
    <apiVersion>61.0</apiVersion>
    <decisions>
        <name>Check</name>
        <label>Check</label>
        <locationX>176</locationX>
        <locationY>278</locationY>
        <defaultConnectorLabel>Default Outcome</defaultConnectorLabel>
        <rules>
            <name>Is_VIP</name>
            <conditionLogic>and</conditionLogic>
            <conditions>
                <leftValueReference>Tier</leftValueReference>
                <operator>EqualTo</operator>
                <rightValue>
                    <stringValue>VIP</stringValue>
                </rightValue>
            </conditions>
            <connector>
                <targetReference>Upgrade</targetReference>
            </connector>
            <label>Is VIP</label>
        </rules>
    </decisions>
    <description>Routes VIP customers to an upgrade.</description>
    <label>Customer Tiering</label>
    <processType>Flow</processType>
    <recordUpdates>
        <name>Upgrade</name>
        <label>Upgrade</label>
        <locationX>50</locationX>
        <locationY>398</locationY>
        <inputReference>Customer</inputReference>
    </recordUpdates>
    <screens>
        <name>Welcome</name>
        <label>Welcome</label>
        <allowBack>true</allowBack>
        <connector>
            <targetReference>Check</targetReference>
        </connector>
    </screens>
    <start>
        <locationX>50</locationX>
        <locationY>0</locationY>
        <connector>
            <targetReference>Welcome</targetReference>
        </connector>
    </start>
    <status>Active</status>
    <variables>
        <name>Tier</name>
        <dataType>String</dataType>
        <isCollection>false</isCollection>
        <isInput>true</isInput>
        <isOutput>false</isOutput>
    </variables>
    <variables>
        <name>Customer</name>
        <dataType>SObject</dataType>
        <isCollection>false</isCollection>
        <isInput>true</isInput>
        <isOutput>true</isOutput>
        <objectType>Account</objectType>
    </variables>
</Flow>
"#;

/// A loop whose "next item" and "no more values" paths both lead to `Touch`.
#[allow(dead_code)]
pub const LOOP_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Flow xmlns="http://soap.sforce.com/2006/04/metadata">
    <assignments>
        <name>Touch</name>
        <label>Touch</label>
        <connector>
            <targetReference>Each_Contact</targetReference>
        </connector>
    </assignments>
    <label>Contact Sweep</label>
    <loops>
        <name>Each_Contact</name>
        <label>Each Contact</label>
        <collectionReference>Contacts</collectionReference>
        <iterationOrder>Asc</iterationOrder>
        <nextValueConnector>
            <targetReference>Touch</targetReference>
        </nextValueConnector>
        <noMoreValuesConnector>
            <targetReference>Touch</targetReference>
        </noMoreValuesConnector>
    </loops>
    <processType>AutoLaunchedFlow</processType>
    <start>
        <connector>
            <targetReference>Each_Contact</targetReference>
        </connector>
    </start>
</Flow>
"#;

/// Two record operations with fault paths into the same custom error.
#[allow(dead_code)]
pub const FAULT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Flow xmlns="http://soap.sforce.com/2006/04/metadata">
    <customErrors>
        <name>Report_Failure</name>
        <label>Report Failure</label>
    </customErrors>
    <label>Create Case</label>
    <processType>AutoLaunchedFlow</processType>
    <recordCreates>
        <name>Create_Case</name>
        <label>Create Case</label>
        <connector>
            <targetReference>Close_Case</targetReference>
        </connector>
        <faultConnector>
            <targetReference>Report_Failure</targetReference>
        </faultConnector>
    </recordCreates>
    <recordUpdates>
        <name>Close_Case</name>
        <label>Close Case</label>
        <faultConnector>
            <isGoTo>true</isGoTo>
            <targetReference>Report_Failure</targetReference>
        </faultConnector>
    </recordUpdates>
    <start>
        <connector>
            <targetReference>Create_Case</targetReference>
        </connector>
    </start>
</Flow>
"#;

/// A record-triggered start with two scheduled paths, one of them unlabeled.
#[allow(dead_code)]
pub const SCHEDULED_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Flow xmlns="http://soap.sforce.com/2006/04/metadata">
    <actionCalls>
        <name>Send_Reminder</name>
        <label>Send Reminder</label>
        <actionName>emailSimple</actionName>
        <actionType>emailSimple</actionType>
    </actionCalls>
    <actionCalls>
        <name>Escalate</name>
        <label>Escalate</label>
        <actionName>chatterPost</actionName>
        <actionType>chatterPost</actionType>
    </actionCalls>
    <assignments>
        <name>Stamp</name>
        <label>Stamp</label>
    </assignments>
    <label>Opportunity Follow Up</label>
    <processType>AutoLaunchedFlow</processType>
    <start>
        <connector>
            <targetReference>Stamp</targetReference>
        </connector>
        <object>Opportunity</object>
        <recordTriggerType>Create</recordTriggerType>
        <scheduledPaths>
            <name>One_Day_Later</name>
            <label>One Day Later</label>
            <connector>
                <targetReference>Send_Reminder</targetReference>
            </connector>
            <offsetNumber>1</offsetNumber>
            <offsetUnit>Days</offsetUnit>
            <timeSource>RecordTriggerEvent</timeSource>
        </scheduledPaths>
        <scheduledPaths>
            <name>Week_Later</name>
            <connector>
                <targetReference>Escalate</targetReference>
            </connector>
            <offsetNumber>7</offsetNumber>
            <offsetUnit>Days</offsetUnit>
            <timeSource>RecordTriggerEvent</timeSource>
        </scheduledPaths>
        <triggerType>RecordAfterSave</triggerType>
    </start>
</Flow>
"#;

/// A wait element with two events and a default path.
#[allow(dead_code)]
pub const WAIT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Flow xmlns="http://soap.sforce.com/2006/04/metadata">
    <label>Approval Wait</label>
    <processType>AutoLaunchedFlow</processType>
    <screens>
        <name>Approved</name>
        <label>Approved</label>
    </screens>
    <screens>
        <name>Timed_Out</name>
        <label>Timed Out</label>
    </screens>
    <start>
        <connector>
            <targetReference>Hold</targetReference>
        </connector>
    </start>
    <waits>
        <name>Hold</name>
        <label>Hold</label>
        <defaultConnector>
            <targetReference>Timed_Out</targetReference>
        </defaultConnector>
        <defaultConnectorLabel>Default Path</defaultConnectorLabel>
        <waitEvents>
            <name>On_Approval</name>
            <label>On Approval</label>
            <connector>
                <targetReference>Approved</targetReference>
            </connector>
            <eventType>PlatformEvent</eventType>
        </waitEvents>
        <waitEvents>
            <name>Reminder</name>
            <connector>
                <targetReference>Timed_Out</targetReference>
            </connector>
            <eventType>AlarmEvent</eventType>
        </waitEvents>
    </waits>
</Flow>
"#;

/// Deserializes and compiles a document, panicking on any error.
#[allow(dead_code)]
pub fn compile_xml(xml: &str, show_fault_paths: bool) -> ParsedFlow {
    let raw = RawFlow::from_xml(xml).expect("Failed to parse flow XML");
    Compiler::builder(raw)
        .show_fault_paths(show_fault_paths)
        .build()
        .compile()
        .expect("Failed to compile flow")
}

/// Edge texts in `from-->to` / `from-->|label|to` shorthand, for compact assertions.
#[allow(dead_code)]
pub fn edge_strings(flow: &ParsedFlow) -> Vec<String> {
    flow.connectors
        .iter()
        .map(|c| match &c.label {
            Some(label) => format!("{}-->|{}|{}", c.from, label, c.to),
            None => format!("{}-->{}", c.from, c.to),
        })
        .collect()
}
