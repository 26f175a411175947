//! Partial-update validation: the identity-match rule, the per-entity
//! allow-list, and the userName uniqueness pre-check.

use uuid::Uuid;

use crate::error::{DomainError, parse_id};
use crate::ports::AuthorRepository;

/// Allow-listed field set for an author update. A `None` field is left
/// untouched by the store; presence is distinct from "set to empty".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub user_name: Option<String>,
}

impl AuthorChanges {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.user_name.is_none()
    }
}

/// Allow-listed field set for a post update. The author reference is
/// deliberately not representable here, so it can never be rewritten
/// through the update path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

/// Updates must name their target twice: in the path and in the body.
/// A body without an id is rejected, not defaulted.
pub fn check_id_match(path_id: &str, body_id: Option<&str>) -> Result<(), DomainError> {
    match body_id {
        Some(body_id) if body_id == path_id => Ok(()),
        other => Err(DomainError::IdMismatch {
            path_id: path_id.to_owned(),
            body_id: other.unwrap_or("missing").to_owned(),
        }),
    }
}

/// Validate an author update and return the target id with the field
/// set to merge. The uniqueness pre-check excludes the target itself
/// and only runs when `userName` is part of the update; the store's
/// unique index remains the source of truth.
pub async fn validate_author_update(
    authors: &dyn AuthorRepository,
    path_id: &str,
    body_id: Option<&str>,
    changes: AuthorChanges,
) -> Result<(Uuid, AuthorChanges), DomainError> {
    check_id_match(path_id, body_id)?;
    let id = parse_id("author", path_id)?;

    if let Some(user_name) = &changes.user_name {
        if authors
            .find_by_user_name(user_name, Some(id))
            .await?
            .is_some()
        {
            return Err(DomainError::Conflict(user_name.clone()));
        }
    }

    Ok((id, changes))
}

/// Validate a post update: identity match only. The allow-list is
/// enforced by the shape of [`PostChanges`].
pub fn validate_post_update(
    path_id: &str,
    body_id: Option<&str>,
    changes: PostChanges,
) -> Result<(Uuid, PostChanges), DomainError> {
    check_id_match(path_id, body_id)?;
    let id = parse_id("post", path_id)?;
    Ok((id, changes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Author;
    use crate::test_support::MemAuthors;

    #[test]
    fn matching_ids_pass() {
        assert!(check_id_match("abc", Some("abc")).is_ok());
    }

    #[test]
    fn mismatched_ids_are_rejected() {
        let err = check_id_match("abc", Some("def")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Request path id (abc) and request body id (def) must match"
        );
    }

    #[test]
    fn a_body_without_an_id_is_rejected() {
        assert!(check_id_match("abc", None).is_err());
    }

    #[tokio::test]
    async fn taking_another_authors_user_name_conflicts() {
        let authors = MemAuthors::default();
        let ada = authors.add(Author::new("Ada".into(), "Lovelace".into(), "ada".into()));
        authors.add(Author::new("Mary".into(), "Shelley".into(), "mary".into()));

        let id = ada.id.to_string();
        let changes = AuthorChanges {
            user_name: Some("mary".into()),
            ..Default::default()
        };
        let err = validate_author_update(&authors, &id, Some(&id), changes)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "The userName `mary` is already in use");
    }

    #[tokio::test]
    async fn keeping_your_own_user_name_is_allowed() {
        let authors = MemAuthors::default();
        let ada = authors.add(Author::new("Ada".into(), "Lovelace".into(), "ada".into()));

        let id = ada.id.to_string();
        let changes = AuthorChanges {
            first_name: Some("Augusta".into()),
            user_name: Some("ada".into()),
            ..Default::default()
        };
        let (target, validated) = validate_author_update(&authors, &id, Some(&id), changes)
            .await
            .unwrap();
        assert_eq!(target, ada.id);
        assert_eq!(validated.first_name.as_deref(), Some("Augusta"));
    }

    #[tokio::test]
    async fn no_uniqueness_lookup_without_a_user_name_change() {
        // MemAuthors would happily answer; the point is that a name-only
        // update on an id that parses goes through without a conflict.
        let authors = MemAuthors::default();
        let ada = authors.add(Author::new("Ada".into(), "Lovelace".into(), "ada".into()));

        let id = ada.id.to_string();
        let changes = AuthorChanges {
            last_name: Some("King".into()),
            ..Default::default()
        };
        assert!(
            validate_author_update(&authors, &id, Some(&id), changes)
                .await
                .is_ok()
        );
    }

    #[test]
    fn post_update_rejects_a_malformed_target() {
        let err = validate_post_update("zzz", Some("zzz"), PostChanges::default()).unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "post", .. }));
    }
}
