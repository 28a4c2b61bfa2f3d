use crate::{
    db::dao::{MpsEntryDao, RecordDao},
    db::entities::mps_entry,
    error::AppError,
    requests::NewMpsEntry,
};

#[derive(Clone)]
pub struct MpsService {
    mps_dao: MpsEntryDao,
}

impl MpsService {
    pub fn new(mps_dao: MpsEntryDao) -> Self {
        Self { mps_dao }
    }

    /// Schedules demand for a product. A product id with no matching product
    /// yields `UnprocessableEntity` and nothing is stored.
    pub async fn create(&self, new: NewMpsEntry) -> Result<mps_entry::Model, AppError> {
        Ok(self.mps_dao.create_entry(new).await?)
    }

    pub async fn list_all(&self) -> Result<Vec<mps_entry::Model>, AppError> {
        Ok(self.mps_dao.list_all().await?)
    }
}
