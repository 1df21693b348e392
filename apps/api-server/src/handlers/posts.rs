//! Post resource handlers - the four CRUD routes.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::{NewPost, PostPatch};
use quill_core::error::StoreError;
use quill_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /posts
///
/// Every post in the store, in insertion order, in the five-field
/// external projection. Read-only.
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let candidate: NewPost = body.into_inner().into();

    // Reject incomplete candidates before anything reaches the store
    candidate.validate()?;

    let post = state.posts.insert(candidate).await?;
    tracing::debug!(post_id = %post.id, "Post created");

    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}

/// PUT /posts/{id}
///
/// The body's `id` field is ignored in favor of the path parameter.
/// Responds 204 with an empty body; `id` and `created` are preserved.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let patch: PostPatch = body.into_inner().into();

    patch.validate()?;

    match state.posts.update_by_id(id, patch).await {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(StoreError::NotFound) => {
            Err(AppError::NotFound(format!("post with id {} not found", id)))
        }
        Err(e) => Err(e.into()),
    }
}

/// DELETE /posts/{id}
///
/// Deleting an id that is already absent is treated as idempotent success.
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    match state.posts.delete_by_id(id).await {
        Ok(()) | Err(StoreError::NotFound) => Ok(HttpResponse::NoContent().finish()),
        Err(e) => Err(e.into()),
    }
}
