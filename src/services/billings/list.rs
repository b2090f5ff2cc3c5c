use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::BillingService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    billings::requests::{BillingListParams, BillingListQuery},
    users::entities::UserRole,
};

pub async fn list_billings(
    service: &BillingService,
    query: BillingListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let mut list_query = BillingListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        status: query.status,
        billing_type: query.billing_type,
        month: query.month,
        year: query.year,
        academic_year_id: query.academic_year_id,
        class_id: query.class_id,
        student_id: query.student_id,
        search: query.search,
    };

    // Paying roles only ever see their own billings, whatever the query says.
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

    match storage.list_billings_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Billing list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve billing list: {e}"),
            )),
        ),
    }
}
