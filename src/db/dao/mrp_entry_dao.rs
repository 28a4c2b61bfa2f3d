use sea_orm::{DatabaseConnection, Set};
use tracing::info;

use super::{DaoResult, RecordDao};
use crate::db::entities::{mrp_entry, prelude::MrpEntry};
use crate::requests::NewMrpEntry;

#[derive(Clone)]
pub struct MrpEntryDao {
    db: DatabaseConnection,
}

impl RecordDao for MrpEntryDao {
    type Entity = MrpEntry;
    const ENTITY_NAME: &'static str = "mrp entry";

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl MrpEntryDao {
    pub async fn create_entry(&self, new: NewMrpEntry) -> DaoResult<mrp_entry::Model> {
        let model = mrp_entry::ActiveModel {
            product_id: Set(new.product_id),
            periods: Set(new.periods),
            scrap_percentage: Set(new.scrap_percentage),
            ..Default::default()
        };
        let created = self.insert(model).await?;
        info!(id = created.id, product_id = created.product_id, "mrp entry registered");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::MrpEntryDao;
    use crate::db::dao::{DaoLayerError, ProductDao, RecordDao};
    use crate::requests::NewMrpEntry;
    use crate::test_helpers::{sample_product, test_db};

    #[tokio::test]
    async fn entries_accumulate_per_product() {
        let db = test_db().await;
        let products = ProductDao::new(&db);
        let widget = products
            .create_product(sample_product("A1", "Widget"))
            .await
            .expect("product should be created");
        let gadget = products
            .create_product(sample_product("B2", "Gadget"))
            .await
            .expect("product should be created");
        let dao = MrpEntryDao::new(&db);

        for (product_id, periods) in [(widget.id, 6), (gadget.id, 3), (widget.id, 12)] {
            dao.create_entry(NewMrpEntry {
                product_id,
                periods,
                scrap_percentage: 1.5,
            })
            .await
            .expect("entry should be created");
        }

        let listed: Vec<(i32, i32)> = dao
            .list_all()
            .await
            .expect("list should succeed")
            .into_iter()
            .map(|entry| (entry.product_id, entry.periods))
            .collect();
        assert_eq!(listed, vec![(widget.id, 6), (gadget.id, 3), (widget.id, 12)]);
    }

    #[tokio::test]
    async fn dangling_product_reference_is_a_foreign_key_error() {
        let db = test_db().await;
        let dao = MrpEntryDao::new(&db);

        let err = dao
            .create_entry(NewMrpEntry {
                product_id: 42,
                periods: 6,
                scrap_percentage: 1.5,
            })
            .await
            .expect_err("missing product should be rejected");

        assert!(matches!(err, DaoLayerError::ForeignKey { .. }));
        assert!(dao.list_all().await.expect("list should succeed").is_empty());
    }
}
