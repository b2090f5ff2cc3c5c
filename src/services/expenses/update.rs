use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{ExpenseService, parse_expense_date};
use crate::models::{
    ApiResponse, ErrorCode,
    expenses::{requests::UpdateExpenseRequest, responses::ExpenseResponse},
};

pub async fn update_expense(
    service: &ExpenseService,
    expense_id: i64,
    update_data: UpdateExpenseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(title) = &update_data.title
        && title.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Title must not be empty",
        )));
    }

    if let Some(amount) = update_data.amount
        && amount <= 0
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Amount must be positive",
        )));
    }

    let expense_date_ts = match &update_data.expense_date {
        Some(date) => match parse_expense_date(date) {
            Ok(ts) => Some(ts),
            Err(e) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    format!("Invalid expense date: {e}"),
                )));
            }
        },
        None => None,
    };

    match storage
        .update_expense(expense_id, update_data, expense_date_ts)
        .await
    {
        Ok(Some(expense)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ExpenseResponse { expense },
            "Expense updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ExpenseNotFound,
            "Expense not found",
        ))),
        Err(e) => {
            error!("Failed to update expense {}: {}", expense_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to update expense",
                )),
            )
        }
    }
}
