pub mod config;
pub mod datafeed;
pub mod error;
pub mod fetch;
pub mod mapping;
pub mod trader;
pub mod utils;

pub use datafeed::EfinanceDatafeed;
pub use error::{AppError, Result};
