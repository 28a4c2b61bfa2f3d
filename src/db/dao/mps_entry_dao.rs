use sea_orm::{DatabaseConnection, Set};
use tracing::info;

use super::{DaoResult, RecordDao};
use crate::db::entities::{mps_entry, prelude::MpsEntry};
use crate::requests::NewMpsEntry;

#[derive(Clone)]
pub struct MpsEntryDao {
    db: DatabaseConnection,
}

impl RecordDao for MpsEntryDao {
    type Entity = MpsEntry;
    const ENTITY_NAME: &'static str = "mps entry";

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl MpsEntryDao {
    /// No existence check on `product_id`: the foreign key rejects dangling
    /// references and `insert` reports them as `ForeignKey`.
    pub async fn create_entry(&self, new: NewMpsEntry) -> DaoResult<mps_entry::Model> {
        let model = mps_entry::ActiveModel {
            product_id: Set(new.product_id),
            forecast_demand: Set(new.forecast_demand),
            safety_stock: Set(new.safety_stock),
            date: Set(new.date),
            ..Default::default()
        };
        let created = self.insert(model).await?;
        info!(id = created.id, product_id = created.product_id, "mps entry registered");
        Ok(created)
    }
}
