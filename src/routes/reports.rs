use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::reports::requests::{MonthlyReportParams, ReportPeriodParams};
use crate::models::users::entities::UserRole;
use crate::services::ReportService;

static REPORT_SERVICE: Lazy<ReportService> = Lazy::new(ReportService::new_lazy);

pub async fn financial_summary(
    req: HttpRequest,
    query: web::Query<ReportPeriodParams>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .financial_summary(query.into_inner(), &req)
        .await
}

pub async fn billing_summary(
    req: HttpRequest,
    query: web::Query<ReportPeriodParams>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .billing_summary(query.into_inner(), &req)
        .await
}

pub async fn monthly_report(
    req: HttpRequest,
    query: web::Query<MonthlyReportParams>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .monthly_report(query.into_inner(), &req)
        .await
}

pub fn configure_report_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/reports")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(
                        UserRole::finance_read_roles(),
                    ))
                    .route("/financial-summary", web::get().to(financial_summary))
                    .route("/billing-summary", web::get().to(billing_summary))
                    .route("/monthly", web::get().to(monthly_report)),
            ),
    );
}
