//! In-memory repositories - the store used when no database is
//! configured, and the substrate for tests.
//!
//! Each repository guards its map with an async `RwLock`; one guarded
//! operation is the unit of atomicity, matching the single-document
//! semantics the core expects from a store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{Author, BlogPost};
use quill_core::error::RepoError;
use quill_core::ports::{AuthorRepository, PostRepository};
use quill_core::update::{AuthorChanges, PostChanges};

/// Authors keyed by id. The userName unique index lives here, checked
/// under the write lock, which makes this store the source of truth
/// for uniqueness - the validator's pre-check is only a fast path.
pub struct InMemoryAuthorRepository {
    authors: RwLock<HashMap<Uuid, Author>>,
}

impl InMemoryAuthorRepository {
    pub fn new() -> Self {
        Self {
            authors: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryAuthorRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn find_all(&self) -> Result<Vec<Author>, RepoError> {
        let authors = self.authors.read().await;
        let mut all: Vec<Author> = authors.values().cloned().collect();
        all.sort_by(|a, b| a.user_name.cmp(&b.user_name));
        Ok(all)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, RepoError> {
        Ok(self.authors.read().await.get(&id).cloned())
    }

    async fn find_by_user_name(
        &self,
        user_name: &str,
        exclude: Option<Uuid>,
    ) -> Result<Option<Author>, RepoError> {
        let authors = self.authors.read().await;
        Ok(authors
            .values()
            .find(|a| a.user_name == user_name && Some(a.id) != exclude)
            .cloned())
    }

    async fn insert(&self, author: Author) -> Result<Author, RepoError> {
        let mut authors = self.authors.write().await;
        if authors.values().any(|a| a.user_name == author.user_name) {
            return Err(RepoError::Constraint(author.user_name));
        }
        authors.insert(author.id, author.clone());
        Ok(author)
    }

    async fn update(&self, id: Uuid, changes: AuthorChanges) -> Result<(), RepoError> {
        let mut authors = self.authors.write().await;
        // The index check and the merge happen under one write lock, so
        // two racing updates cannot both slip past it.
        if let Some(user_name) = &changes.user_name {
            if authors.values().any(|a| a.id != id && a.user_name == *user_name) {
                return Err(RepoError::Constraint(user_name.clone()));
            }
        }
        // Updating an absent id is a no-op for the caller.
        if let Some(author) = authors.get_mut(&id) {
            if let Some(first_name) = changes.first_name {
                author.first_name = first_name;
            }
            if let Some(last_name) = changes.last_name {
                author.last_name = last_name;
            }
            if let Some(user_name) = changes.user_name {
                author.user_name = user_name;
            }
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        Ok(self.authors.write().await.remove(&id).is_some())
    }
}

/// Posts keyed by id. Listing returns creation order.
pub struct InMemoryPostRepository {
    posts: RwLock<HashMap<Uuid, BlogPost>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        let mut all: Vec<BlogPost> = posts.values().cloned().collect();
        all.sort_by(|a, b| a.created.cmp(&b.created).then(a.id.cmp(&b.id)));
        Ok(all)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        Ok(self.posts.read().await.get(&id).cloned())
    }

    async fn insert(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        self.posts.write().await.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        // Absent targets are a no-op, as with authors.
        if let Some(post) = posts.get_mut(&id) {
            if let Some(title) = changes.title {
                post.title = title;
            }
            if let Some(content) = changes.content {
                post.content = content;
            }
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        Ok(self.posts.write().await.remove(&id).is_some())
    }

    async fn delete_by_author(&self, author_id: Uuid) -> Result<u64, RepoError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|_, p| p.author_id != author_id);
        let removed = (before - posts.len()) as u64;
        tracing::debug!(%author_id, removed, "swept posts for author");
        Ok(removed)
    }
}
