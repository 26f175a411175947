//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use quill_core::domain::{Author, BlogPost};
use quill_core::error::RepoError;
use quill_core::ports::{AuthorRepository, PostRepository};
use quill_core::update::{AuthorChanges, PostChanges};

use super::entity::author::{self, Entity as AuthorEntity};
use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL author repository.
pub struct PostgresAuthorRepository {
    db: DbConn,
}

impl PostgresAuthorRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn query_err(err: DbErr) -> RepoError {
    RepoError::Query(err.to_string())
}

// Postgres reports unique-index hits inside the error text; there is no
// structured code on this error path.
fn is_unique_violation(err: &DbErr) -> bool {
    let message = err.to_string();
    message.contains("duplicate key") || message.contains("unique constraint")
}

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {
    async fn find_all(&self) -> Result<Vec<Author>, RepoError> {
        let rows = AuthorEntity::find()
            .order_by_asc(author::Column::UserName)
            .all(&self.db)
            .await
            .map_err(query_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, RepoError> {
        let row = AuthorEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;
        Ok(row.map(Into::into))
    }

    async fn find_by_user_name(
        &self,
        user_name: &str,
        exclude: Option<Uuid>,
    ) -> Result<Option<Author>, RepoError> {
        let mut query = AuthorEntity::find().filter(author::Column::UserName.eq(user_name));
        if let Some(id) = exclude {
            query = query.filter(author::Column::Id.ne(id));
        }
        let row = query.one(&self.db).await.map_err(query_err)?;
        Ok(row.map(Into::into))
    }

    async fn insert(&self, author: Author) -> Result<Author, RepoError> {
        let active: author::ActiveModel = author.clone().into();
        AuthorEntity::insert(active)
            .exec(&self.db)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    RepoError::Constraint(author.user_name.clone())
                } else {
                    query_err(e)
                }
            })?;
        Ok(author)
    }

    async fn update(&self, id: Uuid, changes: AuthorChanges) -> Result<(), RepoError> {
        if changes.is_empty() {
            return Ok(());
        }

        let conflict_value = changes.user_name.clone().unwrap_or_default();
        let mut active = author::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(first_name) = changes.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = changes.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(user_name) = changes.user_name {
            active.user_name = Set(user_name);
        }

        match active.update(&self.db).await {
            Ok(_) => Ok(()),
            // Absent targets are a no-op for the caller.
            Err(DbErr::RecordNotUpdated) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(RepoError::Constraint(conflict_value)),
            Err(e) => Err(query_err(e)),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        let result = AuthorEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_err)?;
        Ok(result.rows_affected > 0)
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let rows = PostEntity::find()
            .order_by_asc(post::Column::Created)
            .all(&self.db)
            .await
            .map_err(query_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let row = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;
        Ok(row.map(Into::into))
    }

    async fn insert(&self, blog_post: BlogPost) -> Result<BlogPost, RepoError> {
        let active: post::ActiveModel = blog_post.clone().into();
        PostEntity::insert(active)
            .exec(&self.db)
            .await
            .map_err(query_err)?;
        Ok(blog_post)
    }

    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<(), RepoError> {
        if changes.is_empty() {
            return Ok(());
        }

        let mut active = post::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(content) = changes.content {
            active.content = Set(content);
        }

        match active.update(&self.db).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Ok(()),
            Err(e) => Err(query_err(e)),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_err)?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_by_author(&self, author_id: Uuid) -> Result<u64, RepoError> {
        let result = PostEntity::delete_many()
            .filter(post::Column::AuthorId.eq(author_id))
            .exec(&self.db)
            .await
            .map_err(query_err)?;
        Ok(result.rows_affected)
    }
}
