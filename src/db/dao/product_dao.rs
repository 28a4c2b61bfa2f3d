use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tracing::{info, warn};

use super::{DaoLayerError, DaoResult, RecordDao};
use crate::db::entities::{prelude::Product, product};
use crate::requests::NewProduct;

#[derive(Clone)]
pub struct ProductDao {
    db: DatabaseConnection,
}

impl RecordDao for ProductDao {
    type Entity = Product;
    const ENTITY_NAME: &'static str = "product";

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl ProductDao {
    pub async fn find_by_sku(&self, sku: &str) -> DaoResult<Option<product::Model>> {
        Product::find()
            .filter(product::Column::Sku.eq(sku))
            .one(&self.db)
            .await
            .map_err(DaoLayerError::Db)
    }

    /// Looks the sku up before inserting so the common duplicate case gets a
    /// clean error. The unique index still decides under concurrent inserts;
    /// `insert` maps that violation to the same error.
    pub async fn create_product(&self, new: NewProduct) -> DaoResult<product::Model> {
        if self.find_by_sku(&new.sku).await?.is_some() {
            warn!(sku = %new.sku, "rejected product with existing sku");
            return Err(DaoLayerError::DuplicateKey {
                entity: Self::ENTITY_NAME,
                key: new.sku,
            });
        }

        let model = product::ActiveModel {
            sku: Set(new.sku),
            name: Set(new.name),
            quantity_on_hand: Set(new.quantity_on_hand),
            price: Set(new.price),
            active: Set(new.active),
            lead_time_days: Set(new.lead_time_days),
            ..Default::default()
        };
        let created = self.insert(model).await?;
        info!(id = created.id, sku = %created.sku, "product registered");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    use super::ProductDao;
    use crate::db::dao::{DaoLayerError, RecordDao};
    use crate::requests::NewProduct;
    use crate::test_helpers::{sample_product, test_db};

    #[tokio::test]
    async fn create_product_assigns_id_and_keeps_fields() {
        let db = test_db().await;
        let dao = ProductDao::new(&db);

        let created = dao
            .create_product(sample_product("A1", "Widget"))
            .await
            .expect("product should be created");

        assert!(created.id > 0);
        assert_eq!(created.sku, "A1");
        assert_eq!(created.name, "Widget");
        assert_eq!(created.quantity_on_hand, 10);
        assert_eq!(created.price, 9.99);
        assert!(created.active);
        assert_eq!(created.lead_time_days, 5);
    }

    #[tokio::test]
    async fn duplicate_sku_is_rejected_and_original_row_is_untouched() {
        let db = test_db().await;
        let dao = ProductDao::new(&db);
        dao.create_product(sample_product("A1", "Widget"))
            .await
            .expect("first product should be created");

        let err = dao
            .create_product(sample_product("A1", "Gadget"))
            .await
            .expect_err("second product with the same sku should fail");
        assert!(matches!(
            err,
            DaoLayerError::DuplicateKey { entity: "product", ref key } if key == "A1"
        ));

        let products = dao.list_all().await.expect("list should succeed");
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Widget");
    }

    #[tokio::test]
    async fn store_constraint_rejects_duplicates_that_skip_the_lookup() {
        let db = test_db().await;
        let dao = ProductDao::new(&db);
        dao.create_product(sample_product("RACE-1", "Widget"))
            .await
            .expect("first product should be created");

        // Bypasses the sku lookup, as a concurrent request would after both passed it.
        let racing = crate::db::entities::product::ActiveModel {
            sku: sea_orm::Set("RACE-1".to_string()),
            name: sea_orm::Set("Racer".to_string()),
            quantity_on_hand: sea_orm::Set(1),
            price: sea_orm::Set(1.0),
            active: sea_orm::Set(true),
            lead_time_days: sea_orm::Set(1),
            ..Default::default()
        };
        let err = dao
            .insert(racing)
            .await
            .expect_err("unique index should reject the row");

        assert!(matches!(err, DaoLayerError::DuplicateKey { .. }));
        assert_eq!(dao.list_all().await.expect("list").len(), 1);
    }

    #[tokio::test]
    async fn list_all_returns_rows_in_creation_order() {
        let db = test_db().await;
        let dao = ProductDao::new(&db);
        let skus = ["C3", "A1", "B2"];
        for sku in skus {
            dao.create_product(NewProduct {
                active: false,
                ..sample_product(sku, &format!("Item {sku}"))
            })
            .await
            .expect("product should be created");
        }

        let listed: Vec<String> = dao
            .list_all()
            .await
            .expect("list should succeed")
            .into_iter()
            .map(|product| product.sku)
            .collect();

        assert_eq!(listed, skus);
    }

    #[tokio::test]
    async fn find_by_sku_maps_database_errors() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_errors([DbErr::Custom("lookup failed".to_string())])
            .into_connection();
        let dao = ProductDao::new(&db);

        let err = dao
            .find_by_sku("A1")
            .await
            .expect_err("lookup should fail");
        assert!(matches!(err, DaoLayerError::Db(_)));
    }
}
