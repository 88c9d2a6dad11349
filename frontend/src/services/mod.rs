pub mod api;
pub mod download;
pub mod error;
pub mod logging;
pub mod storage;

pub use api::ApiClient;
pub use error::{ApiError, ApiResult};
pub use logging::Logger;
