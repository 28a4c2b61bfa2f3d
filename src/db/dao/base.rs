use chrono::Utc;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    IntoActiveModel, QueryOrder,
};

use super::base_traits::{RecordEntity, StampedActiveModel};
use super::error::{DaoLayerError, DaoResult};

/// Append-only repository over one entity kind: rows are inserted and listed,
/// never updated or deleted.
#[async_trait::async_trait]
pub trait RecordDao: Clone + Send + Sync + Sized
where
    <Self::Entity as EntityTrait>::Model:
        FromQueryResult + IntoActiveModel<<Self::Entity as EntityTrait>::ActiveModel> + Send + Sync,
    <Self::Entity as EntityTrait>::ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + StampedActiveModel
        + Send,
    Self::Entity: RecordEntity,
{
    type Entity: EntityTrait + Send + Sync;
    /// Human readable kind, used in error messages and logs.
    const ENTITY_NAME: &'static str;

    fn from_db(db: DatabaseConnection) -> Self;

    fn new(db: &DatabaseConnection) -> Self {
        Self::from_db(db.clone())
    }

    fn db(&self) -> &DatabaseConnection;

    async fn insert(
        &self,
        mut active: <Self::Entity as EntityTrait>::ActiveModel,
    ) -> DaoResult<<Self::Entity as EntityTrait>::Model> {
        active.set_created_at(Utc::now().fixed_offset());
        active
            .insert(self.db())
            .await
            .map_err(|err| DaoLayerError::from_write(Self::ENTITY_NAME, err))
    }

    /// Every stored row, oldest first. Ids are assigned in insertion order.
    async fn list_all(&self) -> DaoResult<Vec<<Self::Entity as EntityTrait>::Model>> {
        Self::Entity::find()
            .order_by_asc(Self::Entity::id_column())
            .all(self.db())
            .await
            .map_err(DaoLayerError::Db)
    }
}
