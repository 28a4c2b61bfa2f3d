#[allow(unused_imports)]
pub mod prelude {
    pub use super::bom_component::Entity as BomComponent;
    pub use super::mps_entry::Entity as MpsEntry;
    pub use super::mrp_entry::Entity as MrpEntry;
    pub use super::product::Entity as Product;
    pub use super::work_center::Entity as WorkCenter;
}

pub mod bom_component;
pub mod mps_entry;
pub mod mrp_entry;
pub mod product;
pub mod work_center;
