use super::entities::Billing;
use crate::models::common::PaginationInfo;
use crate::models::payments::entities::Payment;
use serde::Serialize;

// Per-item outcome of a generation batch. One student failing does not
// abort the batch.
#[derive(Debug, Serialize)]
pub struct GeneratedBilling {
    pub student_id: i64,
    pub student_name: String,
    pub bill_number: String,
    pub amount: i64,
}

#[derive(Debug, Serialize)]
pub struct SkippedBilling {
    pub student_id: i64,
    pub student_name: String,
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct FailedBilling {
    pub student_id: i64,
    pub student_name: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateBillingsResponse {
    pub created: Vec<GeneratedBilling>,
    pub skipped: Vec<SkippedBilling>,
    pub failed: Vec<FailedBilling>,
}

// List item joined with student identity for display and search.
#[derive(Debug, Serialize)]
pub struct BillingListItem {
    #[serde(flatten)]
    pub billing: Billing,
    pub student_name: String,
    pub nisn: String,
}

// Aggregates computed in SQL over the filtered set.
#[derive(Debug, Serialize)]
pub struct BillingSummary {
    pub total_amount: i64,
    pub paid_amount: i64,
    pub outstanding_amount: i64,
    pub status_counts: Vec<StatusCount>,
}

#[derive(Debug, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
    pub total_amount: i64,
    pub paid_amount: i64,
}

#[derive(Debug, Serialize)]
pub struct BillingListResponse {
    pub items: Vec<BillingListItem>,
    pub pagination: PaginationInfo,
    pub summary: BillingSummary,
}

#[derive(Debug, Serialize)]
pub struct BillingDetailResponse {
    pub billing: Billing,
    pub student_name: String,
    pub nisn: String,
    pub payments: Vec<Payment>,
}

#[derive(Debug, Serialize)]
pub struct BillingResponse {
    pub billing: Billing,
}
