use crate::models::billings::responses::StatusCount;
use serde::Serialize;

// Income counts completed payments only; outstanding is the unpaid remainder
// of open billings.
#[derive(Debug, Serialize)]
pub struct FinancialSummaryResponse {
    pub total_income: i64,
    pub total_expense: i64,
    pub balance: i64,
    pub outstanding_receivables: i64,
}

#[derive(Debug, Serialize)]
pub struct BillingSummaryResponse {
    pub status_counts: Vec<StatusCount>,
    pub total_amount: i64,
    pub paid_amount: i64,
    pub outstanding_amount: i64,
}

#[derive(Debug, Serialize)]
pub struct MonthlyRow {
    pub month: u32,
    pub income: i64,
    pub expense: i64,
}

#[derive(Debug, Serialize)]
pub struct MonthlyReportResponse {
    pub year: i32,
    pub months: Vec<MonthlyRow>,
}
