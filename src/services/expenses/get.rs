use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ExpenseService;
use crate::models::{ApiResponse, ErrorCode, expenses::responses::ExpenseResponse};

pub async fn get_expense(
    service: &ExpenseService,
    expense_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_expense_by_id(expense_id).await {
        Ok(Some(expense)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ExpenseResponse { expense },
            "Expense retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ExpenseNotFound,
            format!("Expense {expense_id} not found"),
        ))),
        Err(e) => {
            error!("Failed to get expense {}: {}", expense_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to retrieve expense",
                )),
            )
        }
    }
}
