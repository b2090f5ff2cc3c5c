use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AcademicService;
use crate::errors::TsmartError;
use crate::models::{
    ApiResponse, ErrorCode,
    academic::{requests::EnrollStudentRequest, responses::EnrollmentResponse},
};

pub async fn enroll_student(
    service: &AcademicService,
    class_id: i64,
    enrollment: EnrollStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.enroll_student(class_id, enrollment).await {
        Ok(enrollment) => Ok(HttpResponse::Created().json(ApiResponse::success(
            EnrollmentResponse { enrollment },
            "Student enrolled successfully",
        ))),
        Err(TsmartError::NotFound(msg)) => Ok(
            HttpResponse::NotFound().json(ApiResponse::error_empty(ErrorCode::NotFound, msg))
        ),
        Err(TsmartError::Conflict(msg)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::AlreadyEnrolled, msg))),
        Err(e) => {
            error!("Failed to enroll student in class {}: {}", class_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to enroll student",
                )),
            )
        }
    }
}
