//! PostgreSQL post store via SeaORM.

use std::time::Duration;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ConnectOptions, Database, DbConn, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder, Set,
};
use uuid::Uuid;

use quill_core::domain::{NewPost, Post, PostPatch};
use quill_core::error::StoreError;
use quill_core::ports::PostStore;

use super::DatabaseConfig;
use super::entity::post::{self, Entity as PostEntity};

/// Open a connection pool to the post database.
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, DbErr> {
    tracing::info!("Connecting to post database...");

    let opts = ConnectOptions::new(&config.url)
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true)
        .to_owned();

    let conn = Database::connect(opts).await?;
    tracing::info!("Post database connected (pool: {})", config.max_connections);
    Ok(conn)
}

/// PostgreSQL-backed post store.
pub struct PostgresPostStore {
    db: DbConn,
}

impl PostgresPostStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn query_err(e: DbErr) -> StoreError {
    StoreError::Query(e.to_string())
}

#[async_trait]
impl PostStore for PostgresPostStore {
    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        let models = PostEntity::find()
            .order_by_asc(post::Column::Created)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, candidate: NewPost) -> Result<Post, StoreError> {
        let record = Post::from_candidate(candidate);
        tracing::debug!(post_id = %record.id, "Inserting post");

        let active: post::ActiveModel = record.into();
        let inserted = active.insert(&self.db).await.map_err(query_err)?;

        Ok(inserted.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let model = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(model.map(Into::into))
    }

    async fn update_by_id(&self, id: Uuid, patch: PostPatch) -> Result<(), StoreError> {
        let model = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?
            .ok_or(StoreError::NotFound)?;

        let mut active = model.into_active_model();
        active.title = Set(patch.title);
        active.author_first_name = Set(patch.author.first_name);
        active.author_last_name = Set(patch.author.last_name);
        active.content = Set(patch.content);

        active.update(&self.db).await.map_err(query_err)?;

        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), StoreError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        PostEntity::delete_many()
            .exec(&self.db)
            .await
            .map_err(query_err)?;
        Ok(())
    }
}
