//! In-memory post store - the default when no database is configured, and
//! the isolated instance integration tests inject per run.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{NewPost, Post, PostPatch};
use quill_core::error::StoreError;
use quill_core::ports::PostStore;

/// In-memory store backed by an insertion-ordered Vec behind an async RwLock.
///
/// The Vec keeps list order stable across calls. Note: data is lost on
/// process restart.
pub struct InMemoryPostStore {
    records: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        let records = self.records.read().await;
        Ok(records.clone())
    }

    async fn insert(&self, candidate: NewPost) -> Result<Post, StoreError> {
        let post = Post::from_candidate(candidate);
        tracing::debug!(post_id = %post.id, "Inserting post");

        let mut records = self.records.write().await;
        records.push(post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|p| p.id == id).cloned())
    }

    async fn update_by_id(&self, id: Uuid, patch: PostPatch) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        let post = records
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;

        post.apply(patch);
        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|p| p.id != id);

        if records.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        records.clear();
        Ok(())
    }
}
