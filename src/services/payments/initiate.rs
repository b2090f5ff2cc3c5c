use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{PaymentService, generate_reference_number};
use crate::errors::TsmartError;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    payments::requests::InitiatePaymentRequest,
    users::entities::UserRole,
};

/// Student/parent-initiated payment. Stored as pending and only applied to
/// the billing once a treasurer approves it.
pub async fn initiate_payment(
    service: &PaymentService,
    payment_data: InitiatePaymentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_user(request) else {
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

    if !payment_data.method.is_async() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Cash payments are recorded at the treasury counter",
        )));
    }

    // Paying roles may only pay billings of their own student.
    if matches!(user.role, UserRole::Student | UserRole::Parent) {
        let billing = match storage.get_billing_by_id(payment_data.billing_id).await {
            Ok(Some(billing)) => billing,
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::BillingNotFound,
                    format!("Billing {} not found", payment_data.billing_id),
                )));
            }
            Err(e) => {
                error!("Failed to load billing {}: {}", payment_data.billing_id, e);
                return Ok(HttpResponse::InternalServerError().json(
                    ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Failed to initiate payment",
                    ),
                ));
            }
        };

        if user.student_id != Some(billing.student_id) {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "Billing belongs to another student",
            )));
        }
    }

    match storage
        .initiate_payment(payment_data, generate_reference_number())
        .await
    {
        Ok(response) => Ok(HttpResponse::Created().json(ApiResponse::success(
            response,
            "Payment initiated, awaiting verification",
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
            error!("Failed to initiate payment: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to initiate payment",
                )),
            )
        }
    }
}
