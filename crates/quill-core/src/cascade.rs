//! Author deletion and its cascade over dependent posts.

use uuid::Uuid;

use crate::error::DomainError;
use crate::ports::{AuthorRepository, PostRepository};

/// What an author cascade delete actually removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeOutcome {
    pub posts_deleted: u64,
    pub author_deleted: bool,
}

/// Delete an author together with every post referencing them.
///
/// The posts go first: the author id is the lookup key for the sweep,
/// and while the author record is still present every dependent post
/// stays reachable through it. If the sweep fails the author is left
/// untouched and the whole operation fails. The two steps are not
/// atomic; a fault between them removes the posts but keeps the author,
/// which the caller sees as an internal error.
pub async fn delete_author(
    authors: &dyn AuthorRepository,
    posts: &dyn PostRepository,
    author_id: Uuid,
) -> Result<CascadeOutcome, DomainError> {
    let posts_deleted = posts.delete_by_author(author_id).await?;
    let author_deleted = authors.delete(author_id).await?;
    Ok(CascadeOutcome {
        posts_deleted,
        author_deleted,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::domain::{Author, BlogPost};
    use crate::error::RepoError;
    use crate::update::{AuthorChanges, PostChanges};

    type CallLog = Arc<Mutex<Vec<&'static str>>>;

    struct LoggingAuthors {
        log: CallLog,
    }

    #[async_trait]
    impl AuthorRepository for LoggingAuthors {
        async fn find_all(&self) -> Result<Vec<Author>, RepoError> {
            unimplemented!()
        }
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Author>, RepoError> {
            unimplemented!()
        }
        async fn find_by_user_name(
            &self,
            _user_name: &str,
            _exclude: Option<Uuid>,
        ) -> Result<Option<Author>, RepoError> {
            unimplemented!()
        }
        async fn insert(&self, _author: Author) -> Result<Author, RepoError> {
            unimplemented!()
        }
        async fn update(&self, _id: Uuid, _changes: AuthorChanges) -> Result<(), RepoError> {
            unimplemented!()
        }
        async fn delete(&self, _id: Uuid) -> Result<bool, RepoError> {
            self.log.lock().unwrap().push("author");
            Ok(true)
        }
    }

    struct LoggingPosts {
        log: CallLog,
        fail_sweep: bool,
    }

    #[async_trait]
    impl PostRepository for LoggingPosts {
        async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
            unimplemented!()
        }
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<BlogPost>, RepoError> {
            unimplemented!()
        }
        async fn insert(&self, _post: BlogPost) -> Result<BlogPost, RepoError> {
            unimplemented!()
        }
        async fn update(&self, _id: Uuid, _changes: PostChanges) -> Result<(), RepoError> {
            unimplemented!()
        }
        async fn delete(&self, _id: Uuid) -> Result<bool, RepoError> {
            unimplemented!()
        }
        async fn delete_by_author(&self, _author_id: Uuid) -> Result<u64, RepoError> {
            if self.fail_sweep {
                return Err(RepoError::Query("sweep failed".to_owned()));
            }
            self.log.lock().unwrap().push("posts");
            Ok(2)
        }
    }

    #[tokio::test]
    async fn posts_are_swept_before_the_author() {
        let log: CallLog = Arc::default();
        let authors = LoggingAuthors { log: log.clone() };
        let posts = LoggingPosts {
            log: log.clone(),
            fail_sweep: false,
        };

        let outcome = delete_author(&authors, &posts, Uuid::new_v4())
            .await
            .unwrap();
        assert_eq!(*log.lock().unwrap(), ["posts", "author"]);
        assert_eq!(outcome.posts_deleted, 2);
        assert!(outcome.author_deleted);
    }

    #[tokio::test]
    async fn a_failed_sweep_leaves_the_author_untouched() {
        let log: CallLog = Arc::default();
        let authors = LoggingAuthors { log: log.clone() };
        let posts = LoggingPosts {
            log: log.clone(),
            fail_sweep: true,
        };

        let err = delete_author(&authors, &posts, Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Internal(_)));
        assert!(log.lock().unwrap().is_empty());
    }
}
