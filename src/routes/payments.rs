use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::payments::requests::{
    CreatePaymentRequest, InitiatePaymentRequest, PaymentListParams, VerifyPaymentRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::PaymentService;
use crate::utils::SafeIdI64;

static PAYMENT_SERVICE: Lazy<PaymentService> = Lazy::new(PaymentService::new_lazy);

pub async fn record_payment(
    req: HttpRequest,
    payment_data: web::Json<CreatePaymentRequest>,
) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE
        .record_payment(payment_data.into_inner(), &req)
        .await
}

pub async fn initiate_payment(
    req: HttpRequest,
    payment_data: web::Json<InitiatePaymentRequest>,
) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE
        .initiate_payment(payment_data.into_inner(), &req)
        .await
}

pub async fn verify_payment(
    req: HttpRequest,
    payment_id: SafeIdI64,
    verify_data: web::Json<VerifyPaymentRequest>,
) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE
        .verify_payment(payment_id.0, verify_data.into_inner(), &req)
        .await
}

pub async fn get_payment(req: HttpRequest, payment_id: SafeIdI64) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE.get_payment(payment_id.0, &req).await
}

pub async fn list_payments(
    req: HttpRequest,
    query: web::Query<PaymentListParams>,
) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE.list_payments(query.into_inner(), &req).await
}

fn payer_or_finance_roles() -> Vec<&'static UserRole> {
    let mut roles = UserRole::finance_read_roles().to_vec();
    roles.extend_from_slice(UserRole::payer_roles());
    roles
}

pub fn configure_payment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/payments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::get()
                            .to(list_payments)
                            .wrap(middlewares::RequireRole::new_any(&payer_or_finance_roles())),
                    )
                    // Manual entry by the treasury, completed immediately.
                    .route(
                        web::post()
                            .to(record_payment)
                            .wrap(middlewares::RequireRole::new_any(UserRole::treasury_roles())),
                    ),
            )
            .service(
                web::resource("/initiate").route(
                    web::post()
                        .to(initiate_payment)
                        .wrap(middlewares::RequireRole::new_any(UserRole::payer_roles())),
                ),
            )
            .service(
                web::resource("/{id}").route(
                    web::get()
                        .to(get_payment)
                        .wrap(middlewares::RequireRole::new_any(&payer_or_finance_roles())),
                ),
            )
            .service(
                web::resource("/{id}/verify").route(
                    web::post()
                        .to(verify_payment)
                        .wrap(middlewares::RequireRole::new_any(UserRole::treasury_roles())),
                ),
            ),
    );
}
