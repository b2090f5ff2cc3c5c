use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PaymentService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    payments::requests::{PaymentListParams, PaymentListQuery},
    users::entities::UserRole,
};

pub async fn list_payments(
    service: &PaymentService,
    query: PaymentListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let mut list_query = PaymentListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        status: query.status,
        method: query.method,
        billing_id: query.billing_id,
        student_id: None,
        date_from: query.date_from,
        date_to: query.date_to,
        search: query.search,
    };

    // Paying roles only ever see payments against their own billings.
    if let Some(user) = RequireJWT::extract_user(request)
        && matches!(user.role, UserRole::Student | UserRole::Parent)
    {
        match user.student_id {
            Some(student_id) => list_query.student_id = Some(student_id),
            None => {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "Account is not linked to a student",
                )));
            }
        }
    }

    match storage.list_payments_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Payment list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve payment list: {e}"),
            )),
        ),
    }
}
