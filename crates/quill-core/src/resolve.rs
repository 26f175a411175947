//! Reference resolution between posts and their authors.
//!
//! Write paths call [`resolve_author`] to confirm the reference exists
//! before anything is persisted. Read paths call [`resolve_post`] /
//! [`resolve_posts`] to attach the live author record, which is the only
//! way to reach the derived display name.

use uuid::Uuid;

use crate::domain::{Author, BlogPost, ResolvedPost};
use crate::error::DomainError;
use crate::ports::AuthorRepository;

/// Validate an author reference on the write path.
pub async fn resolve_author(
    authors: &dyn AuthorRepository,
    id: Uuid,
) -> Result<Author, DomainError> {
    authors
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::InvalidReference(id.to_string()))
}

/// Attach the live author record to a post read back from the store.
///
/// A dangling reference here means the cascade delete was bypassed; the
/// post cannot be serialized without its author, so this surfaces as an
/// internal fault rather than a client error.
pub async fn resolve_post(
    authors: &dyn AuthorRepository,
    post: BlogPost,
) -> Result<ResolvedPost, DomainError> {
    let author_id = post.author_id;
    match authors.find_by_id(author_id).await? {
        Some(author) => ResolvedPost::new(post, author),
        None => Err(DomainError::Internal(format!(
            "post {} references missing author {}",
            post.id, author_id
        ))),
    }
}

/// Populate a batch of posts for a list read. A post whose author has
/// vanished (a cascade racing this read) is skipped rather than failing
/// the whole listing; callers can compare lengths to detect it.
pub async fn resolve_posts(
    authors: &dyn AuthorRepository,
    posts: Vec<BlogPost>,
) -> Result<Vec<ResolvedPost>, DomainError> {
    let mut resolved = Vec::with_capacity(posts.len());
    for post in posts {
        if let Some(author) = authors.find_by_id(post.author_id).await? {
            resolved.push(ResolvedPost::new(post, author)?);
        }
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemAuthors;

    #[tokio::test]
    async fn an_unknown_reference_is_invalid() {
        let authors = MemAuthors::default();
        let id = Uuid::new_v4();
        let err = resolve_author(&authors, id).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("There's no author with the id: {id}")
        );
    }

    #[tokio::test]
    async fn a_known_reference_resolves_to_the_record() {
        let authors = MemAuthors::default();
        let ada = authors.add(Author::new("Ada".into(), "Lovelace".into(), "ada".into()));
        let found = resolve_author(&authors, ada.id).await.unwrap();
        assert_eq!(found.user_name, "ada");
    }

    #[tokio::test]
    async fn single_post_resolution_fails_on_a_dangling_author() {
        let authors = MemAuthors::default();
        let post = BlogPost::new("Hi".into(), "World".into(), Uuid::new_v4());
        let err = resolve_post(&authors, post).await.unwrap_err();
        assert!(matches!(err, DomainError::Internal(_)));
    }

    #[tokio::test]
    async fn batch_resolution_skips_dangling_posts() {
        let authors = MemAuthors::default();
        let ada = authors.add(Author::new("Ada".into(), "Lovelace".into(), "ada".into()));

        let good = BlogPost::new("Hi".into(), "World".into(), ada.id);
        let dangling = BlogPost::new("Lost".into(), "Orphan".into(), Uuid::new_v4());

        let resolved = resolve_posts(&authors, vec![good.clone(), dangling])
            .await
            .unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].post().id, good.id);
        assert_eq!(resolved[0].full_name(), "Ada Lovelace");
    }
}
