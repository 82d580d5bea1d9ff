//! Structured error handling for the Promo pipeline
//!
//! This module provides structured error types for pipeline operations,
//! enabling better error handling, logging, and integration with the host
//! engine.

use thiserror::Error;

/// Error type for Promo pipeline operations
#[derive(Error, Debug, Clone)]
pub enum PromoError {
    /// Malformed rule definitions
    #[error("Rule error: {message}")]
    Rule { message: String, rule_id: Option<u64>, rule_title: Option<String> },

    /// Invalid rule or transform configuration
    #[error("Configuration error: {message}")]
    Configuration { message: String, setting: Option<String> },

    /// A registered transform failed while preparing a rule
    #[error("Transform error: {message}")]
    Transform { message: String, transform_name: Option<String>, rule_id: Option<u64> },

    /// Serialization and deserialization errors
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal { message: String, component: Option<String> },
}

impl PromoError {
    /// Get the error category for logging and metrics
    pub fn category(&self) -> &'static str {
        match self {
            PromoError::Rule { .. } => "rule",
            PromoError::Configuration { .. } => "configuration",
            PromoError::Transform { .. } => "transform",
            PromoError::Serialization { .. } => "serialization",
            PromoError::Internal { .. } => "internal",
        }
    }

    /// Create a rule error with context
    pub fn rule(message: impl Into<String>, rule_id: Option<u64>) -> Self {
        PromoError::Rule { message: message.into(), rule_id, rule_title: None }
    }

    /// Create a transform error carrying the transform name and rule id
    pub fn transform(message: impl Into<String>, transform_name: &str, rule_id: u64) -> Self {
        PromoError::Transform {
            message: message.into(),
            transform_name: Some(transform_name.to_string()),
            rule_id: Some(rule_id),
        }
    }

    /// Create an internal error scoped to a component
    pub fn internal(message: impl Into<String>, component: &str) -> Self {
        PromoError::Internal {
            message: message.into(),
            component: Some(component.to_string()),
        }
    }
}

impl From<serde_json::Error> for PromoError {
    fn from(err: serde_json::Error) -> Self {
        PromoError::Serialization { message: err.to_string() }
    }
}

impl From<anyhow::Error> for PromoError {
    fn from(err: anyhow::Error) -> Self {
        PromoError::Internal { message: err.to_string(), component: None }
    }
}

/// Result type alias for pipeline operations
pub type PromoResult<T> = Result<T, PromoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_errors_convert_to_serialization() {
        let source = serde_json::from_str::<promo_types::Rule>("{").unwrap_err();
        let err = PromoError::from(source);

        assert!(matches!(err, PromoError::Serialization { .. }));
        assert_eq!(err.category(), "serialization");
    }

    #[test]
    fn anyhow_errors_convert_to_internal() {
        let err = PromoError::from(anyhow::anyhow!("registry lookup failed"));

        match err {
            PromoError::Internal { ref message, ref component } => {
                assert_eq!(message, "registry lookup failed");
                assert!(component.is_none());
            }
            ref other => panic!("expected an internal error, got {other:?}"),
        }
        assert_eq!(err.category(), "internal");
    }

    #[test]
    fn constructor_helpers_fill_in_context() {
        let err = PromoError::transform("bad ratio", "bogo_ratio", 9);
        match err {
            PromoError::Transform { transform_name, rule_id, .. } => {
                assert_eq!(transform_name.as_deref(), Some("bogo_ratio"));
                assert_eq!(rule_id, Some(9));
            }
            other => panic!("expected a transform error, got {other:?}"),
        }

        assert_eq!(PromoError::rule("no packages", Some(3)).category(), "rule");
        assert_eq!(PromoError::internal("boom", "processor").category(), "internal");
    }
}
