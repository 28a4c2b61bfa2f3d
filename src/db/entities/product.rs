use master_record_derive::master_record;
use sea_orm::entity::prelude::*;

#[master_record]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(unique)]
    pub sku: String,
    pub name: String,
    pub quantity_on_hand: i32,
    pub price: f64,
    #[sea_orm(default_value = true)]
    pub active: bool,
    pub lead_time_days: i32,
    #[sea_orm(has_many)]
    pub mps_entries: HasMany<super::mps_entry::Entity>,
    #[sea_orm(has_many)]
    pub mrp_entries: HasMany<super::mrp_entry::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
