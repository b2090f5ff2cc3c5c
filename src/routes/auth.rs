use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::config::AppConfig;
use crate::middlewares;
use crate::models::auth::requests::LoginRequest;
use crate::services::AuthService;

static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

pub async fn login(
    req: HttpRequest,
    login_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login(login_data.into_inner(), &req).await
}

pub async fn refresh_token(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.refresh_token(&request).await
}

pub async fn logout(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.logout(&request).await
}

pub async fn profile(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.profile(&request).await
}

pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    let rate_limit = &AppConfig::get().rate_limit;
    cfg.service(
        web::scope("/api/v1/auth")
            .service(
                web::scope("/login")
                    .wrap(middlewares::RateLimit::new(
                        rate_limit.login_max_requests,
                        rate_limit.login_window_secs,
                    ))
                    .route("", web::post().to(login)),
            )
            .route("/token/refresh", web::post().to(refresh_token))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireJWT)
                    .route("/logout", web::post().to(logout))
                    .route("/profile", web::get().to(profile)),
            ),
    );
}
