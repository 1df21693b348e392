use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewPost, Post, PostPatch};
use crate::error::StoreError;

/// Persistence port for the post collection.
///
/// The store owns identifier assignment: `insert` takes a candidate and
/// returns the persisted record with its `id` and `created` filled in.
/// Lookups for a missing id yield `None` rather than an error; mutations
/// against a missing id yield `StoreError::NotFound`.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Every record in the collection, in insertion order.
    async fn list(&self) -> Result<Vec<Post>, StoreError>;

    /// Persist a candidate, assigning `id` and defaulting `created`.
    async fn insert(&self, candidate: NewPost) -> Result<Post, StoreError>;

    /// Find a record by id. Absence is a `None`, not an error.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError>;

    /// Mutate the matching record in place, preserving `id` and `created`.
    async fn update_by_id(&self, id: Uuid, patch: PostPatch) -> Result<(), StoreError>;

    /// Remove the matching record.
    async fn delete_by_id(&self, id: Uuid) -> Result<(), StoreError>;

    /// Drop the whole collection. Test teardown only.
    async fn clear(&self) -> Result<(), StoreError>;
}
