use super::entities::{BillingStatus, BillingType};
use crate::models::common::PaginationQuery;
use serde::Deserialize;

// Batch billing generation: one billing per matching active enrollment.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateBillingsRequest {
    pub month: u32,
    pub year: i32,
    pub academic_year_id: i64,
    pub billing_type: BillingType,
    pub class_ids: Option<Vec<i64>>,
    pub description: Option<String>,
    /// Overrides the per-class SPP amount (required for non-SPP types
    /// unless the configured default should apply).
    pub amount: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct BillingListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<BillingStatus>,
    pub billing_type: Option<BillingType>,
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub academic_year_id: Option<i64>,
    pub class_id: Option<i64>,
    pub student_id: Option<i64>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct BillingListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub status: Option<BillingStatus>,
    pub billing_type: Option<BillingType>,
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub academic_year_id: Option<i64>,
    pub class_id: Option<i64>,
    pub student_id: Option<i64>,
    pub search: Option<String>,
}
