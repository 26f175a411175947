//! Author handlers.

use actix_web::{HttpResponse, web};

use quill_core::cascade;
use quill_core::domain::Author;
use quill_core::error::{DomainError, parse_id};
use quill_core::update::{AuthorChanges, validate_author_update};
use quill_shared::dto::{
    AuthorListResponse, AuthorView, CreateAuthorRequest, UpdateAuthorRequest,
};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn view(author: &Author) -> AuthorView {
    AuthorView {
        id: author.id.to_string(),
        first_name: author.first_name.clone(),
        last_name: author.last_name.clone(),
        user_name: author.user_name.clone(),
    }
}

/// GET /authors
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let authors = state.authors.find_all().await?;
    Ok(HttpResponse::Ok().json(AuthorListResponse {
        authors: authors.iter().map(view).collect(),
    }))
}

/// GET /authors/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let raw = path.into_inner();
    let id = parse_id("author", &raw)?;
    let author = state
        .authors
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity: "author",
            id: raw,
        })?;
    Ok(HttpResponse::Ok().json(view(&author)))
}

/// POST /authors
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateAuthorRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let author = Author::create(req.first_name, req.last_name, req.user_name)?;
    // The store's unique index has the final say on userName clashes.
    let author = state.authors.insert(author).await?;
    tracing::info!(author_id = %author.id, "created author");
    Ok(HttpResponse::Created().json(view(&author)))
}

/// PUT /authors/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateAuthorRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let changes = AuthorChanges {
        first_name: req.first_name,
        last_name: req.last_name,
        user_name: req.user_name,
    };
    let (id, changes) = validate_author_update(
        state.authors.as_ref(),
        &path.into_inner(),
        req.id.as_deref(),
        changes,
    )
    .await?;
    state.authors.update(id, changes).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /authors/{id} - removes the author's posts first, then the
/// author.
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id("author", &path.into_inner())?;
    let outcome = cascade::delete_author(state.authors.as_ref(), state.posts.as_ref(), id).await?;
    tracing::info!(
        author_id = %id,
        posts_deleted = outcome.posts_deleted,
        "deleted author and their blogposts"
    );
    Ok(HttpResponse::NoContent().finish())
}
