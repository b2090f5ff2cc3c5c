use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ExpenseService;
use crate::models::{
    ApiResponse, ErrorCode,
    expenses::requests::{ExpenseListParams, ExpenseListQuery},
};

pub async fn list_expenses(
    service: &ExpenseService,
    query: ExpenseListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(month) = query.month
        && !(1..=12).contains(&month)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Month must be between 1 and 12",
        )));
    }

    let list_query = ExpenseListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        category: query.category,
        month: query.month,
        year: query.year,
        search: query.search,
    };

    match storage.list_expenses_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Expense list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve expense list: {e}"),
            )),
        ),
    }
}
