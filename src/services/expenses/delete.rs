use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ExpenseService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_expense(
    service: &ExpenseService,
    expense_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_expense(expense_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Expense deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ExpenseNotFound,
            "Expense not found",
        ))),
        Err(e) => {
            error!("Failed to delete expense {}: {}", expense_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to delete expense",
                )),
            )
        }
    }
}
