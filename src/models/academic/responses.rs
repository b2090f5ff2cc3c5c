use super::entities::{AcademicYear, Enrollment, SchoolClass};
use crate::models::common::PaginationInfo;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AcademicYearResponse {
    pub academic_year: AcademicYear,
}

#[derive(Debug, Serialize)]
pub struct AcademicYearListResponse {
    pub items: Vec<AcademicYear>,
}

#[derive(Debug, Serialize)]
pub struct ClassResponse {
    pub class: SchoolClass,
}

#[derive(Debug, Serialize)]
pub struct ClassListResponse {
    pub items: Vec<SchoolClass>,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Serialize)]
pub struct EnrollmentResponse {
    pub enrollment: Enrollment,
}
