pub mod errors;
pub mod http;
pub mod logging;
pub mod utils;

pub use errors::YomikataError;
pub use logging::init_tracing;
