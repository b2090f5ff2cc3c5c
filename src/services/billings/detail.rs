use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::BillingService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, users::entities::UserRole};

pub async fn get_billing_detail(
    service: &BillingService,
    billing_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_billing_detail(billing_id).await {
        Ok(Some(detail)) => {
            // Paying roles may only open billings of their own student.
            if let Some(user) = RequireJWT::extract_user(request)
                && matches!(user.role, UserRole::Student | UserRole::Parent)
                && user.student_id != Some(detail.billing.student_id)
            {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "Billing belongs to another student",
                )));
            }

            Ok(HttpResponse::Ok().json(ApiResponse::success(
                detail,
                "Billing retrieved successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::BillingNotFound,
            format!("Billing {billing_id} not found"),
        ))),
        Err(e) => {
            error!("Failed to get billing {}: {}", billing_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to retrieve billing",
                )),
            )
        }
    }
}
