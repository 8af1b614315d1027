//! Anomaly job error types.

use thiserror::Error;

/// Errors raised while running an anomaly job.
///
/// Every variant is fatal for the job that raised it. Nothing is retried.
#[derive(Debug, Error)]
pub enum AnomalyError {
    #[error("Model not found: {reference}")]
    ModelNotFound { reference: String },

    #[error("Invalid model configuration for {reference}: {reason}")]
    InvalidModelConfiguration { reference: String, reason: String },

    #[error("Storage failure: {0}")]
    StorageFailure(String),

    #[error("Scoring failure: {0}")]
    ScoringFailure(String),

    #[error("Length mismatch: expected {expected} rows, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },
}

/// Result type for anomaly job operations.
pub type Result<T> = std::result::Result<T, AnomalyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_not_found_display() {
        let error = AnomalyError::ModelNotFound {
            reference: "M1".to_string(),
        };
        assert_eq!(error.to_string(), "Model not found: M1");
    }

    #[test]
    fn test_invalid_model_configuration_display() {
        let error = AnomalyError::InvalidModelConfiguration {
            reference: "dl-42".to_string(),
            reason: "model must be trained with autoencoder = true".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid model configuration for dl-42: model must be trained with autoencoder = true"
        );
    }

    #[test]
    fn test_storage_failure_display() {
        let error = AnomalyError::StorageFailure("key frame.out is locked".to_string());
        assert_eq!(error.to_string(), "Storage failure: key frame.out is locked");
    }

    #[test]
    fn test_storage_failure_empty_message() {
        let error = AnomalyError::StorageFailure(String::new());
        assert_eq!(error.to_string(), "Storage failure: ");
    }

    #[test]
    fn test_scoring_failure_display() {
        let error = AnomalyError::ScoringFailure("column count differs".to_string());
        assert_eq!(error.to_string(), "Scoring failure: column count differs");
    }

    #[test]
    fn test_length_mismatch_display() {
        let error = AnomalyError::LengthMismatch {
            expected: 100,
            got: 99,
        };
        assert_eq!(error.to_string(), "Length mismatch: expected 100 rows, got 99");
    }

    #[test]
    fn test_invalid_parameter_display() {
        let error = AnomalyError::InvalidParameter {
            name: "threshold".to_string(),
            reason: "must not be NaN".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid parameter: threshold - must not be NaN"
        );
    }

    #[test]
    fn test_model_not_found_debug() {
        let error = AnomalyError::ModelNotFound {
            reference: "M7".to_string(),
        };
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("ModelNotFound"));
        assert!(debug_str.contains("M7"));
    }

    #[test]
    fn test_result_type_err() {
        let result: Result<i32> = Err(AnomalyError::StorageFailure("down".to_string()));
        assert!(matches!(result.unwrap_err(), AnomalyError::StorageFailure(_)));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn std::error::Error> =
            Box::new(AnomalyError::ScoringFailure("test".to_string()));
        assert!(!error.to_string().is_empty());
    }

    #[test]
    fn test_all_error_variants_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnomalyError>();
    }
}
