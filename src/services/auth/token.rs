use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::auth::responses::RefreshTokenResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::jwt;

use super::AuthService;

pub async fn handle_refresh_token(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = service.get_config();

    match jwt::JwtUtils::extract_refresh_token_from_cookie(request) {
        Some(refresh_token) => match jwt::JwtUtils::refresh_access_token(&refresh_token) {
            Ok(new_access_token) => {
                let response = RefreshTokenResponse {
                    access_token: new_access_token,
                    expires_in: config.jwt.access_token_expiry * 60,
                };
                Ok(HttpResponse::Ok().json(ApiResponse::success(
                    response,
                    "Token refreshed successfully",
                )))
            }
            Err(e) => {
                tracing::error!("Refresh token failed: {}", e);

                // Drop the invalid cookie so the client stops retrying it.
                let empty_cookie = jwt::JwtUtils::create_empty_refresh_token_cookie();

                Ok(HttpResponse::Unauthorized().cookie(empty_cookie).json(
                    ApiResponse::error_empty(
                        ErrorCode::TokenInvalid,
                        "Login expired or invalid, please login again",
                    ),
                ))
            }
        },
        None => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ))),
    }
}
