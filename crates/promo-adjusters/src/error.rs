use thiserror::Error;

/// Errors a transform can surface to the processor.
///
/// Guard failures are not errors; a transform that does not own a rule
/// returns it unchanged. An error means the transform matched the rule but
/// its configuration cannot be honored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// The rule's configured quantities are ambiguous or unusable.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What is wrong with the configuration.
        message: String,
    },

    /// The rule matched the transform's guard but its shape cannot express
    /// what the transform needs.
    #[error("Invalid rule: {message}")]
    InvalidRule {
        /// What is wrong with the rule definition.
        message: String,
    },
}
