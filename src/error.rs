use thiserror::Error;

/// Main error type for Agentgraph
#[derive(Error, Debug)]
pub enum AgentgraphError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input (missing path, no usable sources, oversized file)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Extraction errors (per-file; the batch driver logs and continues)
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// JSON serialization errors
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenient Result type using AgentgraphError
pub type Result<T> = std::result::Result<T, AgentgraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AgentgraphError::Config("Test error".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("Test error"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AgentgraphError = io_err.into();
        assert!(matches!(err, AgentgraphError::Io(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: AgentgraphError = json_err.into();
        assert!(matches!(err, AgentgraphError::Serialize(_)));
    }
}
