use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{PaymentService, generate_reference_number};
use crate::errors::TsmartError;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, payments::requests::CreatePaymentRequest};

/// Manual entry by the treasurer. The payment is completed immediately and
/// the billing is updated in the same transaction.
pub async fn record_payment(
    service: &PaymentService,
    payment_data: CreatePaymentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(verified_by) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    if payment_data.amount <= 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::PaymentAmountInvalid,
            "Amount must be positive",
        )));
    }

    if payment_data.admin_fee < 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::PaymentAmountInvalid,
            "Admin fee must not be negative",
        )));
    }

    match storage
        .record_manual_payment(payment_data, generate_reference_number(), verified_by)
        .await
    {
        Ok(response) => Ok(HttpResponse::Created().json(ApiResponse::success(
            response,
            "Payment recorded successfully",
        ))),
        Err(TsmartError::NotFound(msg)) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::BillingNotFound, msg))),
        Err(TsmartError::InvalidTransition(msg)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::BillingNotPayable, msg))),
        Err(TsmartError::Conflict(msg)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::PaymentExceedsOutstanding, msg),
        )),
        Err(TsmartError::Validation(msg)) => Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::PaymentAmountInvalid, msg))),
        Err(e) => {
            error!("Failed to record payment: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to record payment",
                )),
            )
        }
    }
}
