use crate::backend::DiagramBackend;
use crate::error::RenderError;
use crate::flow::ParsedFlow;

/// Pretty-printed JSON of the parsed model, for tooling that wants the graph itself.
pub struct JsonBackend;

impl DiagramBackend for JsonBackend {
    fn render(&self, flow: &ParsedFlow) -> Result<String, RenderError> {
        serde_json::to_string_pretty(flow).map_err(|e| RenderError::Json(e.to_string()))
    }
}
