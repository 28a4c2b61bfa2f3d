pub mod bom_service;
pub mod context;
pub mod mps_service;
pub mod mrp_service;
pub mod product_service;
pub mod work_center_service;

pub use bom_service::BomService;
pub use context::ServiceContext;
pub use mps_service::MpsService;
pub use mrp_service::MrpService;
pub use product_service::ProductService;
pub use work_center_service::WorkCenterService;
