use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] mongodb::error::Error),

    #[error("Document decode error: {0}")]
    DecodeError(#[from] mongodb::bson::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("No document found with _id {id}")]
    NotFound { id: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid document: {message}")]
    InvalidDocument { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl AppError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound { .. })
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            AppError::ConfigError { .. }
                | AppError::InvalidConfigValueError { .. }
                | AppError::TomlError(_)
        )
    }

    /// Process exit status for a fatal error.
    pub fn exit_code(&self) -> i32 {
        if self.is_config_error() {
            2
        } else {
            1
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Process exit status for a finished run. A missing record is not a failure.
pub fn exit_status<T>(result: &Result<T>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(e) if e.is_not_found() => 0,
        Err(e) => e.exit_code(),
    }
}
