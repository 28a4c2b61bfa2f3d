use crate::{
    db::dao::{MrpEntryDao, RecordDao},
    db::entities::mrp_entry,
    error::AppError,
    requests::NewMrpEntry,
};

#[derive(Clone)]
pub struct MrpService {
    mrp_dao: MrpEntryDao,
}

impl MrpService {
    pub fn new(mrp_dao: MrpEntryDao) -> Self {
        Self { mrp_dao }
    }

    pub async fn create(&self, new: NewMrpEntry) -> Result<mrp_entry::Model, AppError> {
        Ok(self.mrp_dao.create_entry(new).await?)
    }

    pub async fn list_all(&self) -> Result<Vec<mrp_entry::Model>, AppError> {
        Ok(self.mrp_dao.list_all().await?)
    }
}
