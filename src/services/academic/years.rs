use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AcademicService;
use crate::errors::TsmartError;
use crate::models::{
    ApiResponse, ErrorCode,
    academic::{
        requests::CreateAcademicYearRequest,
        responses::{AcademicYearListResponse, AcademicYearResponse},
    },
};

pub async fn create_academic_year(
    service: &AcademicService,
    year_data: CreateAcademicYearRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if year_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Academic year name must not be empty",
        )));
    }

    match storage.create_academic_year(year_data).await {
        Ok(academic_year) => Ok(HttpResponse::Created().json(ApiResponse::success(
            AcademicYearResponse { academic_year },
            "Academic year created successfully",
        ))),
        Err(TsmartError::Conflict(msg)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::AcademicYearAlreadyExists, msg),
        )),
        Err(e) => {
            error!("Failed to create academic year: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to create academic year",
                )),
            )
        }
    }
}

pub async fn list_academic_years(
    service: &AcademicService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_academic_years().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AcademicYearListResponse { items },
            "Academic year list retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to list academic years: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to retrieve academic years",
                )),
            )
        }
    }
}

/// Activating a year deactivates every other year in the same transaction.
pub async fn activate_academic_year(
    service: &AcademicService,
    year_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.set_active_academic_year(year_id).await {
        Ok(Some(academic_year)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AcademicYearResponse { academic_year },
            "Academic year activated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AcademicYearNotFound,
            format!("Academic year {year_id} not found"),
        ))),
        Err(e) => {
            error!("Failed to activate academic year {}: {}", year_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to activate academic year",
                )),
            )
        }
    }
}
