use crate::models::common::PaginationQuery;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateAcademicYearRequest {
    pub name: String,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreateClassRequest {
    pub name: String,
    pub level: Option<String>,
    pub spp_amount: i64,
    pub homeroom_teacher: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateClassRequest {
    pub name: Option<String>,
    pub level: Option<String>,
    pub spp_amount: Option<i64>,
    pub homeroom_teacher: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EnrollStudentRequest {
    pub student_id: i64,
    pub academic_year_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct ClassListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ClassListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}
