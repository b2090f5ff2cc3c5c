pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::NaiveDate;
use std::sync::Arc;

use crate::errors::Result;
use crate::models::expenses::requests::{
    CreateExpenseRequest, ExpenseListParams, UpdateExpenseRequest,
};
use crate::storage::Storage;

pub struct ExpenseService {
    storage: Option<Arc<dyn Storage>>,
}

/// Parses `YYYY-MM-DD` into midnight-UTC unix seconds.
pub(crate) fn parse_expense_date(date: &str) -> Result<i64> {
    let parsed = date.parse::<NaiveDate>()?;
    Ok(parsed
        .and_hms_opt(0, 0, 0)
        .unwrap_or_default()
        .and_utc()
        .timestamp())
}

impl ExpenseService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn create_expense(
        &self,
        expense_data: CreateExpenseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_expense(self, expense_data, request).await
    }

    pub async fn get_expense(
        &self,
        expense_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_expense(self, expense_id, request).await
    }

    pub async fn update_expense(
        &self,
        expense_id: i64,
        update_data: UpdateExpenseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_expense(self, expense_id, update_data, request).await
    }

    pub async fn delete_expense(
        &self,
        expense_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_expense(self, expense_id, request).await
    }

    pub async fn list_expenses(
        &self,
        query: ExpenseListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_expenses(self, query, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_expense_date() {
        assert_eq!(parse_expense_date("1970-01-02").unwrap(), 86_400);
    }

    #[test]
    fn test_parse_expense_date_rejects_garbage() {
        assert!(parse_expense_date("02-01-2026").is_err());
        assert!(parse_expense_date("2026-13-01").is_err());
    }
}
