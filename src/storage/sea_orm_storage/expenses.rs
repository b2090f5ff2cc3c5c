use super::SeaOrmStorage;
use crate::entity::expenses::{ActiveModel, Column, Entity as Expenses};
use crate::errors::{Result, TsmartError};
use crate::models::{
    PaginationInfo,
    expenses::{
        entities::Expense,
        requests::{CreateExpenseRequest, ExpenseListQuery, UpdateExpenseRequest},
        responses::ExpenseListResponse,
    },
};
use crate::utils::escape_like_pattern;
use chrono::{TimeZone, Utc};
use sea_orm::sea_query::{Expr, ExprTrait};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, FromQueryResult, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

#[derive(Debug, FromQueryResult)]
struct SumRow {
    total: Option<i64>,
}

/// Month/year filters translate into a timestamp window over expense_date.
fn expense_filter_condition(query: &ExpenseListQuery) -> Condition {
    let mut cond = Condition::all();

    if let Some(ref category) = query.category {
        cond = cond.add(Column::Category.eq(category.to_string()));
    }

    match (query.year, query.month) {
        (Some(year), Some(month)) => {
            if let Some(window) = month_window(year, month) {
                cond = cond
                    .add(Column::ExpenseDate.gte(window.0))
                    .add(Column::ExpenseDate.lt(window.1));
            }
        }
        (Some(year), None) => {
            if let (Some(start), Some(end)) = (month_window(year, 1), month_window(year + 1, 1)) {
                cond = cond
                    .add(Column::ExpenseDate.gte(start.0))
                    .add(Column::ExpenseDate.lt(end.0));
            }
        }
        _ => {}
    }

    if let Some(ref search) = query.search
        && !search.trim().is_empty()
    {
        let escaped = escape_like_pattern(search.trim());
        cond = cond.add(
            Condition::any()
                .add(Column::Title.contains(&escaped))
                .add(Column::Description.contains(&escaped)),
        );
    }

    cond
}

/// `[start, end)` unix-second window of one calendar month, UTC.
pub(crate) fn month_window(year: i32, month: u32) -> Option<(i64, i64)> {
    let start = Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).single()?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let end = Utc
        .with_ymd_and_hms(next_year, next_month, 1, 0, 0, 0)
        .single()?;
    Some((start.timestamp(), end.timestamp()))
}

impl SeaOrmStorage {
    pub async fn create_expense_impl(
        &self,
        req: CreateExpenseRequest,
        expense_date_ts: i64,
        recorded_by: i64,
    ) -> Result<Expense> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title),
            category: Set(req.category.to_string()),
            amount: Set(req.amount),
            expense_date: Set(expense_date_ts),
            description: Set(req.description),
            recorded_by: Set(recorded_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to create expense: {e}"))
        })?;

        Ok(result.into_expense())
    }

    pub async fn get_expense_by_id_impl(&self, id: i64) -> Result<Option<Expense>> {
        let result = Expenses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TsmartError::database_operation(format!("Failed to query expense: {e}")))?;

        Ok(result.map(|m| m.into_expense()))
    }

    pub async fn update_expense_impl(
        &self,
        id: i64,
        update: UpdateExpenseRequest,
        expense_date_ts: Option<i64>,
    ) -> Result<Option<Expense>> {
        let existing = self.get_expense_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(category) = update.category {
            model.category = Set(category.to_string());
        }

        if let Some(amount) = update.amount {
            model.amount = Set(amount);
        }

        if let Some(ts) = expense_date_ts {
            model.expense_date = Set(ts);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        model.update(&self.db).await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to update expense: {e}"))
        })?;

        self.get_expense_by_id_impl(id).await
    }

    pub async fn delete_expense_impl(&self, id: i64) -> Result<bool> {
        let result = Expenses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                TsmartError::database_operation(format!("Failed to delete expense: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    pub async fn list_expenses_with_pagination_impl(
        &self,
        query: ExpenseListQuery,
    ) -> Result<ExpenseListResponse> {
        let page = std::cmp::max(query.page.unwrap_or(1), 1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let cond = expense_filter_condition(&query);

        let select = Expenses::find()
            .filter(cond.clone())
            .order_by_desc(Column::ExpenseDate);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to count expenses: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to count expense pages: {e}"))
        })?;

        let items = paginator.fetch_page(page - 1).await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to list expenses: {e}"))
        })?;

        // Sum over the whole filtered set, not just the current page.
        let sum = Expenses::find()
            .filter(cond)
            .select_only()
            .column_as(Expr::col((Expenses, Column::Amount)).sum(), "total")
            .into_model::<SumRow>()
            .one(&self.db)
            .await
            .map_err(|e| TsmartError::database_operation(format!("Failed to sum expenses: {e}")))?;

        Ok(ExpenseListResponse {
            items: items.into_iter().map(|m| m.into_expense()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
            total_amount: sum.and_then(|s| s.total).unwrap_or(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_window_covers_full_month() {
        let (start, end) = month_window(2025, 7).unwrap();
        assert_eq!(end - start, 31 * 86_400);
    }

    #[test]
    fn test_month_window_december_rolls_over() {
        let (start, end) = month_window(2025, 12).unwrap();
        assert_eq!(end - start, 31 * 86_400);
        let (jan_start, _) = month_window(2026, 1).unwrap();
        assert_eq!(end, jan_start);
    }

    #[test]
    fn test_month_window_invalid_month() {
        assert!(month_window(2025, 13).is_none());
    }
}
