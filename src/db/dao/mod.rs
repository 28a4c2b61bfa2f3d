pub mod base;
pub mod base_traits;
pub mod bom_component_dao;
mod context;
pub mod error;
pub mod mps_entry_dao;
pub mod mrp_entry_dao;
pub mod product_dao;
pub mod work_center_dao;

pub use base::RecordDao;
pub use base_traits::{RecordEntity, StampedActiveModel};
pub use bom_component_dao::BomComponentDao;
pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
pub use mps_entry_dao::MpsEntryDao;
pub use mrp_entry_dao::MrpEntryDao;
pub use product_dao::ProductDao;
pub use work_center_dao::WorkCenterDao;
