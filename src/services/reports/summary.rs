use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ReportService;
use crate::models::{
    ApiResponse, ErrorCode,
    reports::requests::{MonthlyReportParams, ReportPeriodParams},
};

fn validate_period(period: &ReportPeriodParams) -> Option<&'static str> {
    if let Some(month) = period.month {
        if !(1..=12).contains(&month) {
            return Some("Month must be between 1 and 12");
        }
        if period.year.is_none() {
            return Some("A month filter requires a year");
        }
    }
    None
}

pub async fn financial_summary(
    service: &ReportService,
    period: ReportPeriodParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(reason) = validate_period(&period) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, reason)));
    }

    match storage.financial_summary(period).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Financial summary retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to compute financial summary: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to compute financial summary",
                )),
            )
        }
    }
}

pub async fn billing_summary(
    service: &ReportService,
    period: ReportPeriodParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(reason) = validate_period(&period) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, reason)));
    }

    match storage.billing_summary(period).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Billing summary retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to compute billing summary: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to compute billing summary",
                )),
            )
        }
    }
}

pub async fn monthly_report(
    service: &ReportService,
    params: MonthlyReportParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.monthly_report(params.year).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Monthly report retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to compute monthly report: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to compute monthly report",
                )),
            )
        }
    }
}
