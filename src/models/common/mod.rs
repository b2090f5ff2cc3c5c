pub mod error_code;
pub mod pagination;
pub mod response;

pub use error_code::ErrorCode;
pub use pagination::{PaginationInfo, PaginationQuery};
pub use response::ApiResponse;

/// Records when the process started; exposed for uptime logging.
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
