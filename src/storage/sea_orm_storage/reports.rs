use super::SeaOrmStorage;
use super::expenses::month_window;
use crate::entity::prelude::{Billings, Expenses, Payments};
use crate::entity::{billings, expenses, payments};
use crate::errors::{Result, TsmartError};
use crate::models::{
    billings::entities::BillingStatus,
    payments::entities::PaymentStatus,
    reports::{
        requests::ReportPeriodParams,
        responses::{
            BillingSummaryResponse, FinancialSummaryResponse, MonthlyReportResponse, MonthlyRow,
        },
    },
};
use chrono::{DateTime, Datelike, Utc};
use sea_orm::sea_query::{Expr, ExprTrait, Query};
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, FromQueryResult, QueryFilter, QuerySelect,
};

#[derive(Debug, FromQueryResult)]
struct SumRow {
    total: Option<i64>,
}

#[derive(Debug, FromQueryResult)]
struct OutstandingRow {
    total_amount: Option<i64>,
    paid_amount: Option<i64>,
}

#[derive(Debug, FromQueryResult)]
struct TimedAmountRow {
    ts: i64,
    amount: i64,
}

/// `[start, end)` unix-second window for the requested period, if any.
fn period_window(period: &ReportPeriodParams) -> Option<(i64, i64)> {
    match (period.year, period.month) {
        (Some(year), Some(month)) => month_window(year, month),
        (Some(year), None) => {
            let (start, _) = month_window(year, 1)?;
            let (end, _) = month_window(year + 1, 1)?;
            Some((start, end))
        }
        _ => None,
    }
}

impl SeaOrmStorage {
    /// Income counts completed payments only; the admin fee stays out of
    /// treasury income.
    pub async fn financial_summary_impl(
        &self,
        period: ReportPeriodParams,
    ) -> Result<FinancialSummaryResponse> {
        let window = period_window(&period);

        let mut income_cond = Condition::all()
            .add(payments::Column::Status.eq(PaymentStatus::Completed.to_string()));
        if let Some((start, end)) = window {
            income_cond = income_cond
                .add(payments::Column::PaidAt.gte(start))
                .add(payments::Column::PaidAt.lt(end));
        }
        if let Some(academic_year_id) = period.academic_year_id {
            income_cond = income_cond.add(
                payments::Column::BillingId.in_subquery(
                    Query::select()
                        .column(billings::Column::Id)
                        .from(billings::Entity)
                        .and_where(billings::Column::AcademicYearId.eq(academic_year_id))
                        .to_owned(),
                ),
            );
        }

        let income = Payments::find()
            .filter(income_cond)
            .select_only()
            .column_as(Expr::col((payments::Entity, payments::Column::Amount)).sum(), "total")
            .into_model::<SumRow>()
            .one(&self.db)
            .await
            .map_err(|e| TsmartError::database_operation(format!("Failed to sum income: {e}")))?
            .and_then(|r| r.total)
            .unwrap_or(0);

        let mut expense_cond = Condition::all();
        if let Some((start, end)) = window {
            expense_cond = expense_cond
                .add(expenses::Column::ExpenseDate.gte(start))
                .add(expenses::Column::ExpenseDate.lt(end));
        }

        let expense = Expenses::find()
            .filter(expense_cond)
            .select_only()
            .column_as(Expr::col((expenses::Entity, expenses::Column::Amount)).sum(), "total")
            .into_model::<SumRow>()
            .one(&self.db)
            .await
            .map_err(|e| TsmartError::database_operation(format!("Failed to sum expenses: {e}")))?
            .and_then(|r| r.total)
            .unwrap_or(0);

        // Open billings only; cancelled/waived/paid carry no receivable.
        let mut outstanding_cond = Condition::all().add(billings::Column::Status.is_in([
            BillingStatus::Billed.to_string(),
            BillingStatus::Partial.to_string(),
        ]));
        if let Some(academic_year_id) = period.academic_year_id {
            outstanding_cond =
                outstanding_cond.add(billings::Column::AcademicYearId.eq(academic_year_id));
        }
        if let Some(month) = period.month {
            outstanding_cond = outstanding_cond.add(billings::Column::Month.eq(month as i32));
        }
        if let Some(year) = period.year {
            outstanding_cond = outstanding_cond.add(billings::Column::Year.eq(year));
        }

        let outstanding = Billings::find()
            .filter(outstanding_cond)
            .select_only()
            .column_as(
                Expr::col((billings::Entity, billings::Column::TotalAmount)).sum(),
                "total_amount",
            )
            .column_as(
                Expr::col((billings::Entity, billings::Column::PaidAmount)).sum(),
                "paid_amount",
            )
            .into_model::<OutstandingRow>()
            .one(&self.db)
            .await
            .map_err(|e| {
                TsmartError::database_operation(format!("Failed to sum receivables: {e}"))
            })?
            .map(|r| std::cmp::max(r.total_amount.unwrap_or(0) - r.paid_amount.unwrap_or(0), 0))
            .unwrap_or(0);

        Ok(FinancialSummaryResponse {
            total_income: income,
            total_expense: expense,
            balance: income - expense,
            outstanding_receivables: outstanding,
        })
    }

    pub async fn billing_summary_impl(
        &self,
        period: ReportPeriodParams,
    ) -> Result<BillingSummaryResponse> {
        let now = chrono::Utc::now().timestamp();

        let mut cond = Condition::all();
        if let Some(month) = period.month {
            cond = cond.add(billings::Column::Month.eq(month as i32));
        }
        if let Some(year) = period.year {
            cond = cond.add(billings::Column::Year.eq(year));
        }
        if let Some(academic_year_id) = period.academic_year_id {
            cond = cond.add(billings::Column::AcademicYearId.eq(academic_year_id));
        }

        let summary = self.billing_summary_for_condition(cond, now).await?;

        Ok(BillingSummaryResponse {
            status_counts: summary.status_counts,
            total_amount: summary.total_amount,
            paid_amount: summary.paid_amount,
            outstanding_amount: summary.outstanding_amount,
        })
    }

    /// Per-month income/expense for one year. Rows are fetched in the year
    /// window and bucketed in memory to stay portable across backends.
    pub async fn monthly_report_impl(&self, year: i32) -> Result<MonthlyReportResponse> {
        let (start, _) = month_window(year, 1)
            .ok_or_else(|| TsmartError::validation(format!("Invalid report year {year}")))?;
        let (end, _) = month_window(year + 1, 1)
            .ok_or_else(|| TsmartError::validation(format!("Invalid report year {year}")))?;

        let income_rows = Payments::find()
            .filter(payments::Column::Status.eq(PaymentStatus::Completed.to_string()))
            .filter(payments::Column::PaidAt.gte(start))
            .filter(payments::Column::PaidAt.lt(end))
            .select_only()
            .column_as(payments::Column::PaidAt, "ts")
            .column_as(payments::Column::Amount, "amount")
            .into_model::<TimedAmountRow>()
            .all(&self.db)
            .await
            .map_err(|e| TsmartError::database_operation(format!("Failed to query income: {e}")))?;

        let expense_rows = Expenses::find()
            .filter(expenses::Column::ExpenseDate.gte(start))
            .filter(expenses::Column::ExpenseDate.lt(end))
            .select_only()
            .column_as(expenses::Column::ExpenseDate, "ts")
            .column_as(expenses::Column::Amount, "amount")
            .into_model::<TimedAmountRow>()
            .all(&self.db)
            .await
            .map_err(|e| {
                TsmartError::database_operation(format!("Failed to query expenses: {e}"))
            })?;

        let mut months: Vec<MonthlyRow> = (1..=12)
            .map(|month| MonthlyRow {
                month,
                income: 0,
                expense: 0,
            })
            .collect();

        for row in income_rows {
            let month = month_of(row.ts);
            if (1..=12).contains(&month) {
                months[month as usize - 1].income += row.amount;
            }
        }

        for row in expense_rows {
            let month = month_of(row.ts);
            if (1..=12).contains(&month) {
                months[month as usize - 1].expense += row.amount;
            }
        }

        Ok(MonthlyReportResponse { year, months })
    }
}

fn month_of(ts: i64) -> u32 {
    DateTime::<Utc>::from_timestamp(ts, 0)
        .map(|d| d.month())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_window_single_month() {
        let period = ReportPeriodParams {
            month: Some(7),
            year: Some(2025),
            academic_year_id: None,
        };
        let (start, end) = period_window(&period).unwrap();
        assert_eq!(end - start, 31 * 86_400);
    }

    #[test]
    fn test_period_window_whole_year() {
        let period = ReportPeriodParams {
            month: None,
            year: Some(2025),
            academic_year_id: None,
        };
        let (start, end) = period_window(&period).unwrap();
        assert_eq!(end - start, 365 * 86_400);
    }

    #[test]
    fn test_period_window_absent_without_year() {
        let period = ReportPeriodParams {
            month: Some(7),
            year: None,
            academic_year_id: None,
        };
        assert!(period_window(&period).is_none());
    }

    #[test]
    fn test_month_of() {
        // 2025-07-10T00:00:00Z
        assert_eq!(month_of(1_752_105_600), 7);
    }
}
