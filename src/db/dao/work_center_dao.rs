use sea_orm::{DatabaseConnection, Set};
use tracing::info;

use super::{DaoResult, RecordDao};
use crate::db::entities::{prelude::WorkCenter, work_center};
use crate::requests::NewWorkCenter;

#[derive(Clone)]
pub struct WorkCenterDao {
    db: DatabaseConnection,
}

impl RecordDao for WorkCenterDao {
    type Entity = WorkCenter;
    const ENTITY_NAME: &'static str = "work center";

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl WorkCenterDao {
    pub async fn create_work_center(&self, new: NewWorkCenter) -> DaoResult<work_center::Model> {
        let model = work_center::ActiveModel {
            line_name: Set(new.line_name),
            initial_capacity: Set(new.initial_capacity),
            operator_count: Set(new.operator_count),
            throughput: Set(new.throughput),
            overtime_cost: Set(new.overtime_cost),
            overtime_budget: Set(new.overtime_budget),
            hiring_cost: Set(new.hiring_cost),
            layoff_cost: Set(new.layoff_cost),
            salary: Set(new.salary),
            ..Default::default()
        };
        let created = self.insert(model).await?;
        info!(id = created.id, line = %created.line_name, "work center registered");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::WorkCenterDao;
    use crate::db::dao::RecordDao;
    use crate::test_helpers::{sample_work_center, test_db};

    #[tokio::test]
    async fn salary_stays_empty_unless_provided() {
        let db = test_db().await;
        let dao = WorkCenterDao::new(&db);

        let without = dao
            .create_work_center(sample_work_center("Line 1"))
            .await
            .expect("work center should be created");
        let mut paid = sample_work_center("Line 2");
        paid.salary = Some(1800.0);
        let with = dao
            .create_work_center(paid)
            .await
            .expect("work center should be created");

        assert_eq!(without.salary, None);
        assert_eq!(with.salary, Some(1800.0));

        let lines: Vec<String> = dao
            .list_all()
            .await
            .expect("list should succeed")
            .into_iter()
            .map(|center| center.line_name)
            .collect();
        assert_eq!(lines, ["Line 1", "Line 2"]);
    }
}
