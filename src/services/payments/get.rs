use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::PaymentService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode, payments::responses::PaymentResponse, users::entities::UserRole,
};

pub async fn get_payment(
    service: &PaymentService,
    payment_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_payment_by_id(payment_id).await {
        Ok(Some(payment)) => {
            // Paying roles may only open payments against their own billings.
            if let Some(user) = RequireJWT::extract_user(request)
                && matches!(user.role, UserRole::Student | UserRole::Parent)
            {
                let owns = match storage.get_billing_by_id(payment.billing_id).await {
                    Ok(Some(billing)) => user.student_id == Some(billing.student_id),
                    Ok(None) => false,
                    Err(e) => {
                        error!("Failed to load billing {}: {}", payment.billing_id, e);
                        return Ok(HttpResponse::InternalServerError().json(
                            ApiResponse::error_empty(
                                ErrorCode::InternalServerError,
                                "Failed to retrieve payment",
                            ),
                        ));
                    }
                };
                if !owns {
                    return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                        ErrorCode::Forbidden,
                        "Payment belongs to another student",
                    )));
                }
            }

            Ok(HttpResponse::Ok().json(ApiResponse::success(
                PaymentResponse {
                    payment,
                    billing: None,
                },
                "Payment retrieved successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::PaymentNotFound,
            format!("Payment {payment_id} not found"),
        ))),
        Err(e) => {
            error!("Failed to get payment {}: {}", payment_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to retrieve payment",
                )),
            )
        }
    }
}
