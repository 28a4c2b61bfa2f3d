mod error_format;
mod panic;

pub use error_format::error_format_middleware;
pub use panic::catch_panic_layer;
