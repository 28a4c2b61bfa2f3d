use sea_orm::DatabaseConnection;

use crate::{
    db::dao::DaoContext,
    services::{BomService, MpsService, MrpService, ProductService, WorkCenterService},
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            daos: DaoContext::new(db),
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.db)
    }

    pub fn product(&self) -> ProductService {
        ProductService::new(self.daos.product())
    }

    pub fn bom(&self) -> BomService {
        BomService::new(self.daos.bom_component())
    }

    pub fn work_center(&self) -> WorkCenterService {
        WorkCenterService::new(self.daos.work_center())
    }

    pub fn mps(&self) -> MpsService {
        MpsService::new(self.daos.mps_entry())
    }

    pub fn mrp(&self) -> MrpService {
        MrpService::new(self.daos.mrp_entry())
    }
}
