use thiserror::Error;

/// Errors that abort the flow pipeline before a diagram can be produced.
#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Flow source '{path}' could not be read: {source}")]
    InputNotFound {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse flow XML: {0}")]
    MalformedSource(String),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

impl From<quick_xml::DeError> for FlowError {
    fn from(err: quick_xml::DeError) -> Self {
        FlowError::MalformedSource(err.to_string())
    }
}

impl From<quick_xml::Error> for FlowError {
    fn from(err: quick_xml::Error) -> Self {
        FlowError::MalformedSource(err.to_string())
    }
}

/// Errors that can occur when converting a source format into a `ParsedFlow`.
#[derive(Error, Debug, Clone)]
pub enum ConversionError {
    #[error("Invalid flow source: {0}")]
    ValidationError(String),
}

/// Errors raised by an output backend while rendering a parsed flow.
#[derive(Error, Debug, Clone)]
pub enum RenderError {
    #[error("Failed to serialize flow model: {0}")]
    Json(String),
}
