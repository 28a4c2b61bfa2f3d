use sea_orm::{DatabaseConnection, Set};
use tracing::info;

use super::{DaoResult, RecordDao};
use crate::db::entities::{bom_component, prelude::BomComponent};
use crate::requests::NewBomComponent;

#[derive(Clone)]
pub struct BomComponentDao {
    db: DatabaseConnection,
}

impl RecordDao for BomComponentDao {
    type Entity = BomComponent;
    const ENTITY_NAME: &'static str = "bom component";

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl BomComponentDao {
    pub async fn create_component(
        &self,
        new: NewBomComponent,
    ) -> DaoResult<bom_component::Model> {
        let model = bom_component::ActiveModel {
            material_name: Set(new.material_name),
            quantity_available: Set(new.quantity_available),
            cost: Set(new.cost),
            lead_time_days: Set(new.lead_time_days),
            ..Default::default()
        };
        let created = self.insert(model).await?;
        info!(id = created.id, material = %created.material_name, "bom component registered");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::BomComponentDao;
    use crate::db::dao::RecordDao;
    use crate::requests::NewBomComponent;
    use crate::test_helpers::test_db;

    fn steel(quantity: i32) -> NewBomComponent {
        NewBomComponent {
            material_name: "Steel sheet".to_string(),
            quantity_available: quantity,
            cost: 12.5,
            lead_time_days: 3,
        }
    }

    #[tokio::test]
    async fn duplicate_material_names_are_kept_as_separate_rows() {
        let db = test_db().await;
        let dao = BomComponentDao::new(&db);

        let first = dao.create_component(steel(100)).await.expect("first insert");
        let second = dao.create_component(steel(40)).await.expect("second insert");

        assert_ne!(first.id, second.id);
        let listed = dao.list_all().await.expect("list should succeed");
        assert_eq!(listed, vec![first, second]);
    }
}
