use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::NewStudentService;
use crate::errors::TsmartError;
use crate::models::{ApiResponse, ErrorCode};

/// Approval converts the application into a student record plus a student
/// login. The initial credentials are the NISN for both username and
/// password, to be changed on first login.
pub async fn approve_new_student(
    service: &NewStudentService,
    new_student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let application = match storage.get_new_student_by_id(new_student_id).await {
        Ok(Some(application)) => application,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ApplicationNotFound,
                format!("Application {new_student_id} not found"),
            )));
        }
        Err(e) => {
            error!("Failed to load application {}: {}", new_student_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Approval failed",
                )),
            );
        }
    };

    let password_hash = match crate::utils::password::hash_password(&application.nisn) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Password hashing failed during approval: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Approval failed",
                )),
            );
        }
    };

    match storage
        .approve_new_student(new_student_id, password_hash)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Application approved successfully",
        ))),
        Err(TsmartError::NotFound(msg)) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::ApplicationNotFound, msg))),
        Err(TsmartError::InvalidTransition(msg)) => {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::ApplicationAlreadyProcessed,
                msg,
            )))
        }
        Err(TsmartError::Conflict(msg)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::NisnAlreadyExists, msg))),
        Err(e) => {
            error!("Failed to approve application {}: {}", new_student_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Approval failed",
                )),
            )
        }
    }
}
