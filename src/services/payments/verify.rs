use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::PaymentService;
use crate::errors::TsmartError;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    payments::requests::{VerifyAction, VerifyPaymentRequest},
};

/// Treasurer decision on a pending payment. Approval applies the amount to
/// the billing in the same transaction; rejection leaves the billing alone.
pub async fn verify_payment(
    service: &PaymentService,
    payment_id: i64,
    verify_data: VerifyPaymentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(verified_by) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let approve = verify_data.action == VerifyAction::Approve;

    match storage
        .verify_payment(payment_id, approve, verified_by, verify_data.notes)
        .await
    {
        Ok(response) => {
            let message = if approve {
                "Payment approved"
            } else {
                "Payment rejected"
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, message)))
        }
        Err(TsmartError::NotFound(msg)) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::PaymentNotFound, msg))),
        Err(TsmartError::InvalidTransition(msg)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::PaymentAlreadyFinal, msg))),
        Err(TsmartError::Conflict(msg)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::PaymentExceedsOutstanding, msg),
        )),
        Err(e) => {
            error!("Failed to verify payment {}: {}", payment_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to verify payment",
                )),
            )
        }
    }
}
