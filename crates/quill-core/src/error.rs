//! Domain and repository error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - business rule failures surfaced to the boundary.
///
/// The display text of each variant is the client-facing message; the
/// HTTP layer only adds a status code.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A required field was absent from the request body.
    #[error("Missing `{field}` in request body")]
    MissingField { field: &'static str },

    /// Updates must carry the target id in both the path and the body.
    #[error("Request path id ({path_id}) and request body id ({body_id}) must match")]
    IdMismatch { path_id: String, body_id: String },

    /// A post referenced an author that does not exist.
    #[error("There's no author with the id: {0}")]
    InvalidReference(String),

    /// Another author already holds the requested userName.
    #[error("The userName `{0}` is already in use")]
    Conflict(String),

    #[error("No {entity} found with id `{id}`")]
    NotFound { entity: &'static str, id: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    /// Unique-index violation. Carries the offending value so the
    /// boundary can name it; kept distinct from `Query` so write paths
    /// report a conflict instead of a server fault.
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Constraint(value) => DomainError::Conflict(value),
            other => DomainError::Internal(other.to_string()),
        }
    }
}

/// Parse an opaque wire id. A malformed id behaves like an unknown one.
pub fn parse_id(entity: &'static str, raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw).map_err(|_| DomainError::NotFound {
        entity,
        id: raw.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_ids_read_as_unknown() {
        let err = parse_id("author", "not-a-uuid").unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "author", .. }));
    }

    #[test]
    fn constraint_violations_become_conflicts() {
        let err = DomainError::from(RepoError::Constraint("ada".to_owned()));
        assert_eq!(err.to_string(), "The userName `ada` is already in use");
    }

    #[test]
    fn other_repo_failures_become_internal() {
        let err = DomainError::from(RepoError::Query("boom".to_owned()));
        assert!(matches!(err, DomainError::Internal(_)));
    }
}
