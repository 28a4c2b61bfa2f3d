use master_record_derive::master_record;
use sea_orm::entity::prelude::*;

#[master_record]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "work_centers")]
pub struct Model {
    pub line_name: String,
    pub initial_capacity: i32,
    pub operator_count: i32,
    pub throughput: f64,
    pub overtime_cost: f64,
    pub overtime_budget: f64,
    pub hiring_cost: f64,
    pub layoff_cost: f64,
    /// Only set when the submitter provides it; intake never invents a value.
    pub salary: Option<f64>,
}

impl ActiveModelBehavior for ActiveModel {}
