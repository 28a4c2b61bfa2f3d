use master_record_derive::master_record;
use sea_orm::entity::prelude::*;

// Flat component catalog; not linked to products yet.
#[master_record]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "bom_components")]
pub struct Model {
    pub material_name: String,
    pub quantity_available: i32,
    pub cost: f64,
    pub lead_time_days: i32,
}

impl ActiveModelBehavior for ActiveModel {}
