use thiserror::Error;

/// Errors that can occur in the think MCP service
#[derive(Debug, Error)]
pub enum ThinkError {
    #[error("Invalid arguments: {reason}")]
    InvalidArguments { reason: String },

    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Convert ThinkError to MCP-compatible ErrorData
impl From<ThinkError> for rmcp::model::ErrorData {
    fn from(err: ThinkError) -> Self {
        match err {
            ThinkError::InvalidArguments { .. } | ThinkError::UnknownTool { .. } => {
                rmcp::model::ErrorData::invalid_params(err.to_string(), None)
            }
            _ => rmcp::model::ErrorData::internal_error(err.to_string(), None),
        }
    }
}

pub type ThinkResult<T> = std::result::Result<T, ThinkError>;
