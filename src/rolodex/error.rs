use crate::model::Attribute;
use crate::tags::TagValidationError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum RolodexError {
    #[error("Contact not found: {0}")]
    ContactNotFound(Uuid),

    #[error("Invalid {attribute}: '{value}'")]
    InvalidField { attribute: Attribute, value: String },

    #[error("Invalid tag: {0}")]
    InvalidTag(#[from] TagValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RolodexError>;
