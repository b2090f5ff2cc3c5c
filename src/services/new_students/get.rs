use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::NewStudentService;
use crate::models::{ApiResponse, ErrorCode, new_students::responses::NewStudentResponse};

pub async fn get_new_student(
    service: &NewStudentService,
    new_student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_new_student_by_id(new_student_id).await {
        Ok(Some(new_student)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            NewStudentResponse { new_student },
            "Application retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ApplicationNotFound,
            format!("Application {new_student_id} not found"),
        ))),
        Err(e) => {
            error!("Failed to get application {}: {}", new_student_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to retrieve application",
                )),
            )
        }
    }
}
