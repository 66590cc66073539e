//! Flow metadata XML: the serde model, document loading, and conversion into the flow graph.

mod convert;
pub mod raw;
pub mod xml;

pub use raw::*;
pub use xml::FLOW_ROOT;
