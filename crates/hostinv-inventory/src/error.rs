//! Error types for hostinv-inventory

use thiserror::Error;

/// Errors that can occur during inventory export
#[derive(Error, Debug)]
pub enum InventoryError {
    /// Inventory could not be serialized to JSON
    #[error("can not encode JSON object: {0}")]
    Encode(#[from] serde_json::Error),

    /// Writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Host file could not be read
    #[error("failed to read host file: {0}")]
    SourceRead(std::io::Error),

    /// Host file contents could not be parsed
    #[error("failed to parse host file: {0}")]
    SourceParse(String),

    /// Host file has an extension we cannot read
    #[error("unsupported host file format: {0}")]
    UnsupportedFormat(String),
}

impl InventoryError {
    /// Check if error came from the host source rather than from encoding
    #[must_use]
    pub fn is_source_error(&self) -> bool {
        matches!(
            self,
            InventoryError::SourceRead(_)
                | InventoryError::SourceParse(_)
                | InventoryError::UnsupportedFormat(_)
        )
    }
}

/// Result type for inventory operations
pub type Result<T> = std::result::Result<T, InventoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_source_error() {
        assert!(InventoryError::SourceParse("bad".to_string()).is_source_error());
        assert!(InventoryError::UnsupportedFormat("yaml".to_string()).is_source_error());
        let missing = std::io::Error::from(std::io::ErrorKind::NotFound);
        assert!(InventoryError::SourceRead(missing).is_source_error());

        let broken_pipe = std::io::Error::from(std::io::ErrorKind::BrokenPipe);
        assert!(!InventoryError::from(broken_pipe).is_source_error());
    }

    #[test]
    fn test_encode_error_message() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = InventoryError::from(json_err);
        assert!(err.to_string().starts_with("can not encode JSON object"));
    }
}
