use crate::{
    db::dao::{RecordDao, WorkCenterDao},
    db::entities::work_center,
    error::AppError,
    requests::NewWorkCenter,
};

#[derive(Clone)]
pub struct WorkCenterService {
    work_center_dao: WorkCenterDao,
}

impl WorkCenterService {
    pub fn new(work_center_dao: WorkCenterDao) -> Self {
        Self { work_center_dao }
    }

    pub async fn create(&self, new: NewWorkCenter) -> Result<work_center::Model, AppError> {
        Ok(self.work_center_dao.create_work_center(new).await?)
    }

    pub async fn list_all(&self) -> Result<Vec<work_center::Model>, AppError> {
        Ok(self.work_center_dao.list_all().await?)
    }
}
