use super::entities::ApprovalStatus;
use crate::models::common::PaginationQuery;
use serde::Deserialize;

// Public registration form: creates the login and the application together.
#[derive(Debug, Deserialize)]
pub struct RegisterNewStudentRequest {
    pub username: String,
    pub password: String,
    pub nisn: String,
    pub full_name: String,
    pub birth_place: Option<String>,
    pub birth_date: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub guardian_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewStudentListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub approval_status: Option<ApprovalStatus>,
    pub search: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewStudentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub approval_status: Option<ApprovalStatus>,
    pub search: Option<String>,
}
