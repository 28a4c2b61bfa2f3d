use sea_orm::{DatabaseConnection, DbErr};
use thiserror::Error;
use tracing::info;

/// Module path the schema registry scans for entities.
pub const ENTITY_MODULE: &str = "mfg_planning::db::entities::*";

#[derive(Debug, Error)]
#[error("failed to initialize schema: {0}")]
pub struct SchemaError(#[from] DbErr);

/// Creates every table that does not exist yet. Existing tables and their rows
/// are left alone, so this is safe to run on every start.
pub async fn initialize_schema(db: &DatabaseConnection) -> Result<(), SchemaError> {
    info!("syncing database schema from entities");
    db.get_schema_registry(ENTITY_MODULE).sync(db).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectionTrait, FromQueryResult, Statement};

    use super::initialize_schema;
    use crate::db::dao::{BomComponentDao, ProductDao, RecordDao};
    use crate::requests::NewBomComponent;
    use crate::test_helpers::{sample_product, test_db};

    #[derive(Debug, FromQueryResult)]
    struct TableName {
        name: String,
    }

    async fn table_names(db: &sea_orm::DatabaseConnection) -> Vec<String> {
        TableName::find_by_statement(Statement::from_string(
            db.get_database_backend(),
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        ))
        .all(db)
        .await
        .expect("table listing should succeed")
        .into_iter()
        .map(|table| table.name)
        .collect()
    }

    #[tokio::test]
    async fn creates_all_five_tables() {
        let db = test_db().await;

        assert_eq!(
            table_names(&db).await,
            [
                "bom_components",
                "mps_entries",
                "mrp_entries",
                "products",
                "work_centers"
            ]
        );
    }

    #[tokio::test]
    async fn second_run_keeps_tables_and_rows() {
        let db = test_db().await;
        let product = ProductDao::new(&db)
            .create_product(sample_product("A1", "Widget"))
            .await
            .expect("product should be created");
        BomComponentDao::new(&db)
            .create_component(NewBomComponent {
                material_name: "Resin".to_string(),
                quantity_available: 8,
                cost: 3.25,
                lead_time_days: 2,
            })
            .await
            .expect("component should be created");
        let tables_before = table_names(&db).await;

        initialize_schema(&db)
            .await
            .expect("second initialization should succeed");

        assert_eq!(table_names(&db).await, tables_before);
        let products = ProductDao::new(&db).list_all().await.expect("list");
        assert_eq!(products, vec![product]);
        assert_eq!(
            BomComponentDao::new(&db).list_all().await.expect("list").len(),
            1
        );
    }
}
