use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Author, BlogPost};
use crate::error::RepoError;
use crate::update::{AuthorChanges, PostChanges};

/// Author store. Implementations own the unique index on `user_name`
/// and must surface violations as [`RepoError::Constraint`].
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Author>, RepoError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, RepoError>;

    /// Lookup backing the uniqueness pre-check: any author holding
    /// `user_name`, optionally excluding one id (the update target).
    async fn find_by_user_name(
        &self,
        user_name: &str,
        exclude: Option<Uuid>,
    ) -> Result<Option<Author>, RepoError>;

    async fn insert(&self, author: Author) -> Result<Author, RepoError>;

    /// Merge a validated field set into the stored record as a single
    /// store operation. An absent target is a no-op, not an error.
    async fn update(&self, id: Uuid, changes: AuthorChanges) -> Result<(), RepoError>;

    /// Returns whether a record was actually removed.
    async fn delete(&self, id: Uuid) -> Result<bool, RepoError>;
}

/// BlogPost store.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError>;

    async fn insert(&self, post: BlogPost) -> Result<BlogPost, RepoError>;

    /// Merge a validated field set; absent targets are a no-op.
    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<(), RepoError>;

    /// Returns whether a record was actually removed.
    async fn delete(&self, id: Uuid) -> Result<bool, RepoError>;

    /// Remove every post referencing `author_id`; returns the count.
    /// This is the first half of the author cascade delete.
    async fn delete_by_author(&self, author_id: Uuid) -> Result<u64, RepoError>;
}
