use super::entities::ExpenseCategory;
use crate::models::common::PaginationQuery;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateExpenseRequest {
    pub title: String,
    pub category: ExpenseCategory,
    pub amount: i64,
    /// Calendar date, `YYYY-MM-DD`.
    pub expense_date: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateExpenseRequest {
    pub title: Option<String>,
    pub category: Option<ExpenseCategory>,
    pub amount: Option<i64>,
    pub expense_date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExpenseListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub category: Option<ExpenseCategory>,
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub search: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ExpenseListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub category: Option<ExpenseCategory>,
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub search: Option<String>,
}
