pub mod common;

pub mod academic;
pub mod auth;
pub mod billings;
pub mod expenses;
pub mod new_students;
pub mod payments;
pub mod reports;
pub mod students;
pub mod users;

pub use common::{ApiResponse, AppStartTime, ErrorCode, PaginationInfo, PaginationQuery};
