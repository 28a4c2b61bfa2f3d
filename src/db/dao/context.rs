use sea_orm::DatabaseConnection;

use super::{
    BomComponentDao, MpsEntryDao, MrpEntryDao, ProductDao, RecordDao, WorkCenterDao,
};

/// Hands out one repository per record kind over a shared store handle.
#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn product(&self) -> ProductDao {
        RecordDao::new(&self.db)
    }

    pub fn bom_component(&self) -> BomComponentDao {
        RecordDao::new(&self.db)
    }

    pub fn work_center(&self) -> WorkCenterDao {
        RecordDao::new(&self.db)
    }

    pub fn mps_entry(&self) -> MpsEntryDao {
        RecordDao::new(&self.db)
    }

    pub fn mrp_entry(&self) -> MrpEntryDao {
        RecordDao::new(&self.db)
    }
}
