//! Blogpost handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::{PostDraft, ResolvedPost};
use quill_core::error::{DomainError, parse_id};
use quill_core::resolve::{resolve_author, resolve_post, resolve_posts};
use quill_core::update::{PostChanges, validate_post_update};
use quill_shared::dto::{CreatePostRequest, PostListResponse, PostView, UpdatePostRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn view(resolved: &ResolvedPost) -> PostView {
    let post = resolved.post();
    PostView {
        id: post.id.to_string(),
        title: post.title.clone(),
        content: post.content.clone(),
        author: resolved.full_name(),
        created: post.created.timestamp_millis().to_string(),
    }
}

/// GET /posts - every post is populated with its author before
/// serialization.
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let total = posts.len();
    let resolved = resolve_posts(state.authors.as_ref(), posts).await?;
    if resolved.len() < total {
        tracing::warn!(
            skipped = total - resolved.len(),
            "skipped blogposts referencing missing authors"
        );
    }
    Ok(HttpResponse::Ok().json(PostListResponse {
        blogposts: resolved.iter().map(view).collect(),
    }))
}

/// GET /posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let raw = path.into_inner();
    let id = parse_id("post", &raw)?;
    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity: "post",
            id: raw,
        })?;
    let resolved = resolve_post(state.authors.as_ref(), post).await?;
    Ok(HttpResponse::Ok().json(view(&resolved)))
}

/// POST /posts - the author reference must resolve before anything is
/// persisted.
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let draft = PostDraft::new(req.title, req.content, req.author_id)?;
    let author_id = Uuid::parse_str(&draft.author_ref)
        .map_err(|_| DomainError::InvalidReference(draft.author_ref.clone()))?;
    let author = resolve_author(state.authors.as_ref(), author_id).await?;

    let post = state.posts.insert(draft.into_post(&author)).await?;
    tracing::info!(post_id = %post.id, author_id = %author.id, "created blogpost");

    let resolved = ResolvedPost::new(post, author)?;
    Ok(HttpResponse::Created().json(view(&resolved)))
}

/// PUT /posts/{id} - only title and content are updatable; an author
/// field in the body is ignored.
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let changes = PostChanges {
        title: req.title,
        content: req.content,
    };
    let (id, changes) = validate_post_update(&path.into_inner(), req.id.as_deref(), changes)?;
    state.posts.update(id, changes).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id} - no cascade; comments are embedded and go with
/// the post.
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id("post", &path.into_inner())?;
    state.posts.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}
