use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Folder name carries no leading number to order it by.
    #[error("folder name '{name}' does not start with a day number")]
    InvalidOrdinal { name: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
