use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::NewStudentService;
use crate::errors::TsmartError;
use crate::models::{
    ApiResponse, ErrorCode,
    new_students::{requests::RegisterNewStudentRequest, responses::NewStudentResponse},
};
use crate::utils::validate::{validate_nisn, validate_password, validate_phone, validate_username};

/// Public registration endpoint. Creates a restricted login together with
/// the application so the applicant can check their own status.
pub async fn register_new_student(
    service: &NewStudentService,
    mut registration: RegisterNewStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(reason) = validate_username(&registration.username) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, reason)));
    }

    let password_check = validate_password(&registration.password);
    if !password_check.is_valid {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::PasswordPolicyViolation,
            password_check.error_message(),
        )));
    }

    if let Err(reason) = validate_nisn(&registration.nisn) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::NisnInvalid, reason)));
    }

    if registration.full_name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Full name must not be empty",
        )));
    }

    if let Some(phone) = &registration.phone
        && let Err(reason) = validate_phone(phone)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, reason)));
    }

    registration.password = match crate::utils::password::hash_password(&registration.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Password hashing failed during registration: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Registration failed",
                )),
            );
        }
    };

    match storage.register_new_student(registration).await {
        Ok(new_student) => Ok(HttpResponse::Created().json(ApiResponse::success(
            NewStudentResponse { new_student },
            "Registration submitted successfully",
        ))),
        Err(TsmartError::Conflict(msg)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::Conflict, msg))),
        Err(e) => {
            error!("Failed to register new student: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Registration failed",
                )),
            )
        }
    }
}
