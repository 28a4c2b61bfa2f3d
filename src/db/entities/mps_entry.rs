use master_record_derive::master_record;
use sea_orm::entity::prelude::*;

#[master_record]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "mps_entries")]
pub struct Model {
    #[sea_orm(indexed)]
    pub product_id: i32,
    pub forecast_demand: i32,
    pub safety_stock: f64,
    /// Planning bucket date. Nullable: the schedule form does not always carry it.
    pub date: Option<Date>,
    #[sea_orm(belongs_to, from = "product_id", to = "id")]
    pub product: HasOne<super::product::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
