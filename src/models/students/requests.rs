use super::entities::StudentStatus;
use crate::models::common::PaginationQuery;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct StudentListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<StudentStatus>,
    pub class_id: Option<i64>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub nisn: String,
    pub full_name: String,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub guardian_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStudentRequest {
    pub full_name: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub guardian_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChangeStudentStatusRequest {
    pub status: StudentStatus,
}

// Student list query for the storage layer.
#[derive(Debug, Clone)]
pub struct StudentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub status: Option<StudentStatus>,
    pub class_id: Option<i64>,
    pub search: Option<String>,
}
