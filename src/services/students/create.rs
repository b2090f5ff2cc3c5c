use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::errors::TsmartError;
use crate::models::{
    ApiResponse, ErrorCode,
    students::{requests::CreateStudentRequest, responses::StudentResponse},
};
use crate::utils::validate::{validate_nisn, validate_phone};

pub async fn create_student(
    service: &StudentService,
    student_data: CreateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(reason) = validate_nisn(&student_data.nisn) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::NisnInvalid, reason)));
    }

    if student_data.full_name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Full name must not be empty",
        )));
    }

    if let Some(phone) = &student_data.phone
        && let Err(reason) = validate_phone(phone)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, reason)));
    }

    match storage.create_student(student_data).await {
        Ok(student) => Ok(HttpResponse::Created().json(ApiResponse::success(
            StudentResponse { student },
            "Student created successfully",
        ))),
        Err(TsmartError::Conflict(msg)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::NisnAlreadyExists, msg))),
        Err(e) => {
            error!("Failed to create student: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to create student",
                )),
            )
        }
    }
}
