use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::billings::requests::{BillingListParams, GenerateBillingsRequest};
use crate::models::users::entities::UserRole;
use crate::services::BillingService;
use crate::utils::SafeIdI64;

static BILLING_SERVICE: Lazy<BillingService> = Lazy::new(BillingService::new_lazy);

pub async fn generate_billings(
    req: HttpRequest,
    generate_data: web::Json<GenerateBillingsRequest>,
) -> ActixResult<HttpResponse> {
    BILLING_SERVICE
        .generate_billings(generate_data.into_inner(), &req)
        .await
}

pub async fn list_billings(
    req: HttpRequest,
    query: web::Query<BillingListParams>,
) -> ActixResult<HttpResponse> {
    BILLING_SERVICE.list_billings(query.into_inner(), &req).await
}

pub async fn get_billing_detail(
    req: HttpRequest,
    billing_id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    BILLING_SERVICE.get_billing_detail(billing_id.0, &req).await
}

pub async fn cancel_billing(req: HttpRequest, billing_id: SafeIdI64) -> ActixResult<HttpResponse> {
    BILLING_SERVICE.cancel_billing(billing_id.0, &req).await
}

pub async fn waive_billing(req: HttpRequest, billing_id: SafeIdI64) -> ActixResult<HttpResponse> {
    BILLING_SERVICE.waive_billing(billing_id.0, &req).await
}

fn payer_or_finance_roles() -> Vec<&'static UserRole> {
    let mut roles = UserRole::finance_read_roles().to_vec();
    roles.extend_from_slice(UserRole::payer_roles());
    roles
}

pub fn configure_billing_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/billings")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // Payers are scoped to their own student by the service.
                    .route(
                        web::get()
                            .to(list_billings)
                            .wrap(middlewares::RequireRole::new_any(&payer_or_finance_roles())),
                    ),
            )
            .service(
                web::resource("/generate").route(
                    web::post()
                        .to(generate_billings)
                        .wrap(middlewares::RequireRole::new_any(UserRole::treasury_roles())),
                ),
            )
            .service(
                web::resource("/{id}").route(
                    web::get()
                        .to(get_billing_detail)
                        .wrap(middlewares::RequireRole::new_any(&payer_or_finance_roles())),
                ),
            )
            .service(
                web::resource("/{id}/cancel").route(
                    web::post()
                        .to(cancel_billing)
                        .wrap(middlewares::RequireRole::new_any(UserRole::treasury_roles())),
                ),
            )
            .service(
                web::resource("/{id}/waive").route(
                    web::post()
                        .to(waive_billing)
                        .wrap(middlewares::RequireRole::new_any(UserRole::treasury_roles())),
                ),
            ),
    );
}
