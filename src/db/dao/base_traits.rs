pub trait RecordEntity: sea_orm::EntityTrait {
    fn id_column() -> Self::Column;
}

pub trait StampedActiveModel {
    fn set_created_at(&mut self, ts: sea_orm::entity::prelude::DateTimeWithTimeZone);
}
