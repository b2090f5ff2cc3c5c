use super::entities::Payment;
use crate::models::billings::entities::Billing;
use crate::models::common::PaginationInfo;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub payment: Payment,
    /// Billing after the payment was applied, when the operation mutated it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<Billing>,
}

#[derive(Debug, Serialize)]
pub struct PaymentListItem {
    #[serde(flatten)]
    pub payment: Payment,
    pub bill_number: String,
    pub student_name: String,
}

#[derive(Debug, Serialize)]
pub struct PaymentListResponse {
    pub items: Vec<PaymentListItem>,
    pub pagination: PaginationInfo,
}
