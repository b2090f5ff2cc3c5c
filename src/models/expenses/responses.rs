use super::entities::Expense;
use crate::models::common::PaginationInfo;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ExpenseResponse {
    pub expense: Expense,
}

#[derive(Debug, Serialize)]
pub struct ExpenseListResponse {
    pub items: Vec<Expense>,
    pub pagination: PaginationInfo,
    pub total_amount: i64,
}
