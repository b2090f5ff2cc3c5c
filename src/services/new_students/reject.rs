use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::NewStudentService;
use crate::errors::TsmartError;
use crate::models::{ApiResponse, ErrorCode, new_students::responses::NewStudentResponse};

pub async fn reject_new_student(
    service: &NewStudentService,
    new_student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.reject_new_student(new_student_id).await {
        Ok(new_student) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            NewStudentResponse { new_student },
            "Application rejected",
        ))),
        Err(TsmartError::NotFound(msg)) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::ApplicationNotFound, msg))),
        Err(TsmartError::InvalidTransition(msg)) => {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::ApplicationAlreadyProcessed,
                msg,
            )))
        }
        Err(e) => {
            error!("Failed to reject application {}: {}", new_student_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Rejection failed",
                )),
            )
        }
    }
}
