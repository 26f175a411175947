//! Minimal in-memory author store for unit tests in this crate.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Author;
use crate::error::RepoError;
use crate::ports::AuthorRepository;
use crate::update::AuthorChanges;

#[derive(Default)]
pub(crate) struct MemAuthors {
    authors: Mutex<HashMap<Uuid, Author>>,
}

impl MemAuthors {
    pub(crate) fn add(&self, author: Author) -> Author {
        self.authors
            .lock()
            .unwrap()
            .insert(author.id, author.clone());
        author
    }
}

#[async_trait]
impl AuthorRepository for MemAuthors {
    async fn find_all(&self) -> Result<Vec<Author>, RepoError> {
        Ok(self.authors.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, RepoError> {
        Ok(self.authors.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_user_name(
        &self,
        user_name: &str,
        exclude: Option<Uuid>,
    ) -> Result<Option<Author>, RepoError> {
        Ok(self
            .authors
            .lock()
            .unwrap()
            .values()
            .find(|a| a.user_name == user_name && Some(a.id) != exclude)
            .cloned())
    }

    async fn insert(&self, author: Author) -> Result<Author, RepoError> {
        Ok(self.add(author))
    }

    async fn update(&self, id: Uuid, changes: AuthorChanges) -> Result<(), RepoError> {
        if let Some(author) = self.authors.lock().unwrap().get_mut(&id) {
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
        Ok(self.authors.lock().unwrap().remove(&id).is_some())
    }
}
