use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::BillingService;
use crate::errors::TsmartError;
use crate::models::{ApiResponse, ErrorCode, billings::responses::BillingResponse};

pub async fn waive_billing(
    service: &BillingService,
    billing_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.waive_billing(billing_id).await {
        Ok(billing) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            BillingResponse { billing },
            "Billing waived successfully",
        ))),
        Err(TsmartError::NotFound(msg)) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::BillingNotFound, msg))),
        Err(TsmartError::InvalidTransition(msg)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::BillingNotPayable, msg))),
        Err(e) => {
            error!("Failed to waive billing {}: {}", billing_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to waive billing",
                )),
            )
        }
    }
}
