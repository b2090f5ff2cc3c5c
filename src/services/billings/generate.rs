use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::BillingService;
use crate::models::{
    ApiResponse, ErrorCode,
    billings::{entities::due_date_for, requests::GenerateBillingsRequest},
};

pub async fn generate_billings(
    service: &BillingService,
    generate_data: GenerateBillingsRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    if !(1..=12).contains(&generate_data.month) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Month must be between 1 and 12",
        )));
    }

    if let Some(amount) = generate_data.amount
        && amount <= 0
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Amount must be positive",
        )));
    }

    let due_date_ts = match due_date_for(
        generate_data.year,
        generate_data.month,
        config.billing.due_day,
    ) {
        Some(due) => due.timestamp(),
        None => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                format!(
                    "Invalid billing period: {}-{:02}",
                    generate_data.year, generate_data.month
                ),
            )));
        }
    };

    match storage
        .generate_billings(
            generate_data,
            config.billing.default_spp_amount,
            due_date_ts,
        )
        .await
    {
        Ok(response) => {
            info!(
                "Billing generation finished: {} created, {} skipped, {} failed",
                response.created.len(),
                response.skipped.len(),
                response.failed.len()
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                response,
                "Billing generation finished",
            )))
        }
        Err(e) => {
            error!("Billing generation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::BillingGenerationFailed,
                    "Billing generation failed",
                )),
            )
        }
    }
}
