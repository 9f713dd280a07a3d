/// Failures the settings store can observe.
///
/// None of these ever reach the caller of a store operation: they are logged and the
/// in-memory record stays authoritative.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage read failed: {0}")]
    Read(String),
    #[error("Storage write failed: {0}")]
    Write(String),
    #[error("Malformed settings record: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Font size {0}% is outside 80-150 in steps of 10")]
    InvalidFontSize(u16),
}

/// Convenience type alias for store results.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_errors_convert_to_malformed() {
        let json_err = serde_json::from_str::<u8>("nope").unwrap_err();
        let err: StoreError = json_err.into();
        assert!(matches!(err, StoreError::Malformed(_)));
        assert!(err.to_string().starts_with("Malformed settings record"));
    }

    #[test]
    fn error_display() {
        assert_eq!(
            StoreError::InvalidFontSize(155).to_string(),
            "Font size 155% is outside 80-150 in steps of 10"
        );
        assert_eq!(
            StoreError::Write("quota exceeded".to_string()).to_string(),
            "Storage write failed: quota exceeded"
        );
    }
}
