use crate::{
    db::dao::{BomComponentDao, RecordDao},
    db::entities::bom_component,
    error::AppError,
    requests::NewBomComponent,
};

#[derive(Clone)]
pub struct BomService {
    bom_dao: BomComponentDao,
}

impl BomService {
    pub fn new(bom_dao: BomComponentDao) -> Self {
        Self { bom_dao }
    }

    pub async fn create(&self, new: NewBomComponent) -> Result<bom_component::Model, AppError> {
        Ok(self.bom_dao.create_component(new).await?)
    }

    pub async fn list_all(&self) -> Result<Vec<bom_component::Model>, AppError> {
        Ok(self.bom_dao.list_all().await?)
    }
}
