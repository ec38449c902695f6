use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpectrumError {
    #[error("Attribute read failed: {0}")]
    AttributeRead(String),

    #[error("Attribute write failed: {0}")]
    AttributeWrite(String),

    #[error("Template error: {0}")]
    TemplateLoad(String),

    #[error("Widget not found: {0}")]
    WidgetNotFound(String),

    #[error("View has been dismissed")]
    ViewClosed,

    #[error("Not supported: {0}")]
    NotSupported(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Other error: {0}")]
    Other(String),
}
