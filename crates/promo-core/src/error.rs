use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Raised while converting a wire record into a model type.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown criteria item type: {0}")]
    UnknownCriteriaItemType(String),
}
