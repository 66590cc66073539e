use super::raw::RawFlow;
use crate::error::FlowError;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Local name of the root element of a flow metadata document.
pub const FLOW_ROOT: &str = "Flow";

impl RawFlow {
    /// Deserializes a flow metadata document.
    ///
    /// A well-formed document whose root is not `<Flow>`, or that has no root element at all,
    /// yields an empty flow. Syntax errors are returned as `FlowError::MalformedSource`.
    pub fn from_xml(xml: &str) -> Result<Self, FlowError> {
        let mut reader = Reader::from_str(xml);

        let root = loop {
            match reader.read_event()? {
                Event::Start(e) | Event::Empty(e) => {
                    break Some(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
                }
                Event::Text(text) if !text.iter().all(u8::is_ascii_whitespace) => {
                    return Err(FlowError::MalformedSource(
                        "text content outside of the root element".to_string(),
                    ));
                }
                Event::Eof => break None,
                _ => {}
            }
        };

        match root {
            Some(root) if root == FLOW_ROOT => {
                let flow: RawFlow = quick_xml::de::from_str(xml)?;
                debug!(
                    element_blocks = flow.element_block_count(),
                    variables = flow.variables.len(),
                    "deserialized flow document"
                );
                Ok(flow)
            }
            Some(root) => {
                // Still reject broken documents, even though their content is ignored.
                while !matches!(reader.read_event()?, Event::Eof) {}
                warn!(root = %root, "document root is not <{}>, producing an empty flow", FLOW_ROOT);
                Ok(RawFlow::default())
            }
            None => {
                warn!("document has no root element, producing an empty flow");
                Ok(RawFlow::default())
            }
        }
    }

    /// Reads and deserializes a flow metadata file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FlowError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| FlowError::InputNotFound {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_xml(&content)
    }
}
