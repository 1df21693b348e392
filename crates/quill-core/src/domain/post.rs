use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Author of a post, stored as two separate name fields.
///
/// The concatenated display form is derived on the way out and is never
/// persisted, so the stored names remain the single source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorName {
    pub first_name: String,
    pub last_name: String,
}

impl AuthorName {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// The external display form: `"<first_name> <last_name>"`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Post entity - a blog post record as held by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub author: AuthorName,
    pub content: String,
    pub created: DateTime<Utc>,
}

/// Candidate post - everything a caller supplies at creation time.
///
/// The store assigns `id`; `created` defaults to the insertion time when the
/// caller leaves it out.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub author: AuthorName,
    pub content: String,
    pub created: Option<DateTime<Utc>>,
}

/// The mutable subset of a post. `id` and `created` are never patched.
#[derive(Debug, Clone)]
pub struct PostPatch {
    pub title: String,
    pub author: AuthorName,
    pub content: String,
}

fn check_required(fields: &[(&'static str, &str)]) -> Result<(), DomainError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Validation(format!(
            "missing required fields: {}",
            missing.join(", ")
        )))
    }
}

impl NewPost {
    /// Every field except `created` is required and must be non-blank.
    pub fn validate(&self) -> Result<(), DomainError> {
        check_required(&[
            ("title", &self.title),
            ("content", &self.content),
            ("author.first_name", &self.author.first_name),
            ("author.last_name", &self.author.last_name),
        ])
    }
}

impl PostPatch {
    pub fn validate(&self) -> Result<(), DomainError> {
        check_required(&[
            ("title", &self.title),
            ("content", &self.content),
            ("author.first_name", &self.author.first_name),
            ("author.last_name", &self.author.last_name),
        ])
    }
}

impl Post {
    /// Materialize a candidate into a full record, assigning a fresh id and
    /// defaulting `created` to now when the candidate omitted it.
    pub fn from_candidate(candidate: NewPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: candidate.title,
            author: candidate.author,
            content: candidate.content,
            created: candidate.created.unwrap_or_else(Utc::now),
        }
    }

    /// Apply a patch in place, leaving `id` and `created` untouched.
    pub fn apply(&mut self, patch: PostPatch) {
        self.title = patch.title;
        self.author = patch.author;
        self.content = patch.content;
    }
}
