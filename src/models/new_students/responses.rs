use super::entities::NewStudent;
use crate::models::common::PaginationInfo;
use crate::models::students::entities::Student;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NewStudentResponse {
    pub new_student: NewStudent,
}

#[derive(Debug, Serialize)]
pub struct NewStudentListResponse {
    pub items: Vec<NewStudent>,
    pub pagination: PaginationInfo,
}

// Approval creates exactly one student and one student login.
#[derive(Debug, Serialize)]
pub struct ApprovalResponse {
    pub new_student: NewStudent,
    pub student: Student,
    pub student_username: String,
}
