//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use quill_core::domain::{AuthorName, NewPost, Post, PostPatch};

/// Author fields as they appear on the wire: `{ "firstName", "lastName" }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub first_name: String,
    pub last_name: String,
}

impl From<AuthorDto> for AuthorName {
    fn from(dto: AuthorDto) -> Self {
        AuthorName::new(dto.first_name, dto.last_name)
    }
}

/// Request to create a post. `created` is optional; the store defaults it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author: AuthorDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl From<CreatePostRequest> for NewPost {
    fn from(req: CreatePostRequest) -> Self {
        NewPost {
            title: req.title,
            author: req.author.into(),
            content: req.content,
            created: req.created,
        }
    }
}

/// Request to update a post. The `id` field is redundant with the path
/// parameter and is ignored in its favor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: String,
    pub content: String,
    pub author: AuthorDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
}

impl From<UpdatePostRequest> for PostPatch {
    fn from(req: UpdatePostRequest) -> Self {
        PostPatch {
            title: req.title,
            author: req.author.into(),
            content: req.content,
        }
    }
}

/// External projection of a post - exactly the five fields callers see.
///
/// `author` is the derived `"<firstName> <lastName>"` display string; the
/// split name fields never leave the store. `created` serializes as an
/// RFC 3339 string, the canonical interchange form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            author: post.author.display_name(),
            content: post.content,
            created: post.created,
        }
    }
}
