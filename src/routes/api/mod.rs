pub mod public;
pub mod records;
mod router;

pub use router::router;
