//! Typed creation requests, one per record kind.
//!
//! The HTML forms build these through [`crate::intake`]; the JSON API
//! deserializes them directly. Repositories only ever see these types.

use chrono::NaiveDate;
use serde::Deserialize;

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    pub quantity_on_hand: i32,
    pub price: f64,
    #[serde(default = "default_active")]
    pub active: bool,
    pub lead_time_days: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewBomComponent {
    pub material_name: String,
    pub quantity_available: i32,
    pub cost: f64,
    pub lead_time_days: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewWorkCenter {
    pub line_name: String,
    pub initial_capacity: i32,
    pub operator_count: i32,
    pub throughput: f64,
    pub overtime_cost: f64,
    pub overtime_budget: f64,
    pub hiring_cost: f64,
    pub layoff_cost: f64,
    #[serde(default)]
    pub salary: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewMpsEntry {
    pub product_id: i32,
    pub forecast_demand: i32,
    pub safety_stock: f64,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewMrpEntry {
    pub product_id: i32,
    pub periods: i32,
    pub scrap_percentage: f64,
}
