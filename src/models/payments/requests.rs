use super::entities::{PaymentMethod, PaymentStatus};
use crate::models::common::PaginationQuery;
use serde::Deserialize;

// Manual entry by the treasurer: recorded as completed immediately.
#[derive(Debug, Deserialize)]
pub struct CreatePaymentRequest {
    pub billing_id: i64,
    pub amount: i64,
    #[serde(default)]
    pub admin_fee: i64,
    pub method: PaymentMethod,
    pub notes: Option<String>,
    /// Actual payment date; defaults to now.
    pub paid_at: Option<chrono::DateTime<chrono::Utc>>,
}

// Student/parent-initiated payment: pending until verified.
#[derive(Debug, Deserialize)]
pub struct InitiatePaymentRequest {
    pub billing_id: i64,
    pub amount: i64,
    pub method: PaymentMethod,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerifyAction {
    Approve,
    Reject,
}

#[derive(Debug, Deserialize)]
pub struct VerifyPaymentRequest {
    pub action: VerifyAction,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PaymentListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<PaymentStatus>,
    pub method: Option<PaymentMethod>,
    pub billing_id: Option<i64>,
    /// Calendar dates, `YYYY-MM-DD`, inclusive.
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PaymentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub status: Option<PaymentStatus>,
    pub method: Option<PaymentMethod>,
    pub billing_id: Option<i64>,
    /// Scope to one student's billings (payer views).
    pub student_id: Option<i64>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub search: Option<String>,
}
