use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{ExpenseService, parse_expense_date};
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    expenses::{requests::CreateExpenseRequest, responses::ExpenseResponse},
};

pub async fn create_expense(
    service: &ExpenseService,
    expense_data: CreateExpenseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(recorded_by) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    if expense_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Title must not be empty",
        )));
    }

    if expense_data.amount <= 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Amount must be positive",
        )));
    }

    let expense_date_ts = match parse_expense_date(&expense_data.expense_date) {
        Ok(ts) => ts,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                format!("Invalid expense date: {e}"),
            )));
        }
    };

    match storage
        .create_expense(expense_data, expense_date_ts, recorded_by)
        .await
    {
        Ok(expense) => Ok(HttpResponse::Created().json(ApiResponse::success(
            ExpenseResponse { expense },
            "Expense recorded successfully",
        ))),
        Err(e) => {
            error!("Failed to create expense: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to record expense",
                )),
            )
        }
    }
}
