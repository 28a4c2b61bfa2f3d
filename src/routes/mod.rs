pub mod api;
mod entry;
pub mod views;

pub use entry::{API_PREFIX, router};
