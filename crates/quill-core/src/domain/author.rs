use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Author entity - the independent root of the content model.
///
/// `user_name` is globally unique; the store enforces it, write paths
/// pre-check it for a friendlier message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
}

impl Author {
    /// Create a new author with a generated id.
    pub fn new(first_name: String, last_name: String, user_name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            user_name,
        }
    }

    /// Build an author from a creation request. Required fields are
    /// checked in wire order and the first missing one fails the call.
    pub fn create(
        first_name: Option<String>,
        last_name: Option<String>,
        user_name: Option<String>,
    ) -> Result<Self, DomainError> {
        let first_name = first_name.ok_or(DomainError::MissingField { field: "firstName" })?;
        let last_name = last_name.ok_or(DomainError::MissingField { field: "lastName" })?;
        let user_name = user_name.ok_or(DomainError::MissingField { field: "userName" })?;
        Ok(Self::new(first_name, last_name, user_name))
    }

    /// Display name: first and last name joined, trimmed so an empty
    /// half leaves no stray whitespace.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_owned()
    }
}
