use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    PetNotFound(i64),
    OrderNotFound(i64),
    UnknownUser(String),
    MissingId,
    PresetId,
    DuplicateUsername(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::PetNotFound(id) => write!(f, "no pet with id {}", id),
            StoreError::OrderNotFound(id) => write!(f, "no order with id {}", id),
            StoreError::UnknownUser(username) => {
                write!(f, "no user with username {:?}", username)
            }
            StoreError::MissingId => write!(f, "update requires a record with an id"),
            StoreError::PresetId => {
                write!(f, "ids are server-assigned; creation rejects a preset id")
            }
            StoreError::DuplicateUsername(username) => {
                write!(f, "username {:?} is already taken", username)
            }
        }
    }
}

impl std::error::Error for StoreError {}
