use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::prelude::{
    BillingActiveModel, BillingModel, Billings, PaymentActiveModel, Payments, Students,
};
use crate::entity::{billings, payments, students};
use crate::errors::{Result, TsmartError};
use crate::models::{
    PaginationInfo,
    billings::entities::BillingStatus,
    payments::{
        entities::{Payment, PaymentStatus},
        requests::{CreatePaymentRequest, InitiatePaymentRequest, PaymentListQuery},
        responses::{PaymentListItem, PaymentListResponse, PaymentResponse},
    },
};
use crate::utils::escape_like_pattern;
use chrono::NaiveDate;
use sea_orm::sea_query::{Expr, ExprTrait, Query};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseTransaction, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

/// Validates an amount against the billing inside the transaction and
/// returns the updated billing row. Status is recomputed from the amounts,
/// never read back from the stored value.
async fn apply_amount_to_billing(
    txn: &DatabaseTransaction,
    billing_id: i64,
    amount: i64,
    now: i64,
) -> Result<BillingModel> {
    let billing = Billings::find_by_id(billing_id)
        .one(txn)
        .await
        .map_err(|e| TsmartError::database_operation(format!("Failed to query billing: {e}")))?
        .ok_or_else(|| TsmartError::not_found(format!("Billing {billing_id} not found")))?;

    check_billing_payable(&billing, amount)?;

    let paid_amount = billing.paid_amount + amount;
    let status = BillingStatus::recompute(paid_amount, billing.total_amount);

    let updated = BillingActiveModel {
        id: Set(billing.id),
        paid_amount: Set(paid_amount),
        status: Set(status.to_string()),
        updated_at: Set(now),
        ..Default::default()
    }
    .update(txn)
    .await
    .map_err(|e| TsmartError::database_operation(format!("Failed to update billing: {e}")))?;

    Ok(updated)
}

fn check_billing_payable(billing: &BillingModel, amount: i64) -> Result<()> {
    let status: BillingStatus = billing.status.parse().unwrap_or(BillingStatus::Unbilled);
    if status.is_closed() {
        return Err(TsmartError::invalid_transition(format!(
            "Billing {} is {} and accepts no further payments",
            billing.bill_number, billing.status
        )));
    }

    if amount <= 0 {
        return Err(TsmartError::validation(
            "Payment amount must be positive".to_string(),
        ));
    }

    let outstanding = std::cmp::max(billing.total_amount - billing.paid_amount, 0);
    if amount > outstanding {
        return Err(TsmartError::conflict(format!(
            "Payment amount {} exceeds outstanding {} on billing {}",
            amount, outstanding, billing.bill_number
        )));
    }

    Ok(())
}

impl SeaOrmStorage {
    /// Manual treasurer entry: the payment is completed immediately and
    /// applied to the billing in the same transaction.
    pub async fn record_manual_payment_impl(
        &self,
        req: CreatePaymentRequest,
        reference_number: String,
        verified_by: i64,
    ) -> Result<PaymentResponse> {
        let now = chrono::Utc::now().timestamp();
        let paid_at = req.paid_at.map(|d| d.timestamp()).unwrap_or(now);

        let txn = self.db.begin().await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to open transaction: {e}"))
        })?;

        let billing = apply_amount_to_billing(&txn, req.billing_id, req.amount, now).await?;

        let payment = PaymentActiveModel {
            reference_number: Set(reference_number),
            billing_id: Set(req.billing_id),
            amount: Set(req.amount),
            admin_fee: Set(req.admin_fee),
            total_paid: Set(req.amount + req.admin_fee),
            method: Set(req.method.to_string()),
            status: Set(PaymentStatus::Completed.to_string()),
            paid_at: Set(Some(paid_at)),
            verified_by: Set(Some(verified_by)),
            notes: Set(req.notes),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| TsmartError::database_operation(format!("Failed to record payment: {e}")))?;

        txn.commit().await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to commit payment: {e}"))
        })?;

        Ok(PaymentResponse {
            payment: payment.into_payment(),
            billing: Some(billing.into_billing()),
        })
    }

    /// Payer-initiated payment: stays pending, the billing is untouched
    /// until verification. The amount is still validated up front.
    pub async fn initiate_payment_impl(
        &self,
        req: InitiatePaymentRequest,
        reference_number: String,
    ) -> Result<PaymentResponse> {
        let now = chrono::Utc::now().timestamp();

        let billing = Billings::find_by_id(req.billing_id)
            .one(&self.db)
            .await
            .map_err(|e| TsmartError::database_operation(format!("Failed to query billing: {e}")))?
            .ok_or_else(|| {
                TsmartError::not_found(format!("Billing {} not found", req.billing_id))
            })?;

        check_billing_payable(&billing, req.amount)?;

        let payment = PaymentActiveModel {
            reference_number: Set(reference_number),
            billing_id: Set(req.billing_id),
            amount: Set(req.amount),
            admin_fee: Set(0),
            total_paid: Set(req.amount),
            method: Set(req.method.to_string()),
            status: Set(PaymentStatus::Pending.to_string()),
            notes: Set(req.notes),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| TsmartError::database_operation(format!("Failed to initiate payment: {e}")))?;

        Ok(PaymentResponse {
            payment: payment.into_payment(),
            billing: None,
        })
    }

    /// Verification transaction. Approve applies the amount to the billing
    /// and completes the payment; reject fails it without touching the
    /// billing. Terminal payments are refused either way.
    pub async fn verify_payment_impl(
        &self,
        id: i64,
        approve: bool,
        verified_by: i64,
        notes: Option<String>,
    ) -> Result<PaymentResponse> {
        let now = chrono::Utc::now().timestamp();

        let txn = self.db.begin().await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to open transaction: {e}"))
        })?;

        let payment = Payments::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| TsmartError::database_operation(format!("Failed to query payment: {e}")))?
            .ok_or_else(|| TsmartError::not_found(format!("Payment {id} not found")))?;

        let status: PaymentStatus = payment.status.parse().unwrap_or(PaymentStatus::Pending);
        if status.is_terminal() {
            return Err(TsmartError::invalid_transition(format!(
                "Payment {} is already {}",
                payment.reference_number, payment.status
            )));
        }

        let billing = if approve {
            Some(apply_amount_to_billing(&txn, payment.billing_id, payment.amount, now).await?)
        } else {
            None
        };

        let new_status = if approve {
            PaymentStatus::Completed
        } else {
            PaymentStatus::Failed
        };

        let mut model = PaymentActiveModel {
            id: Set(payment.id),
            status: Set(new_status.to_string()),
            verified_by: Set(Some(verified_by)),
            updated_at: Set(now),
            ..Default::default()
        };

        if approve && payment.paid_at.is_none() {
            model.paid_at = Set(Some(now));
        }

        if let Some(notes) = notes {
            model.notes = Set(Some(notes));
        }

        let updated = model.update(&txn).await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to update payment: {e}"))
        })?;

        txn.commit().await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to commit verification: {e}"))
        })?;

        Ok(PaymentResponse {
            payment: updated.into_payment(),
            billing: billing.map(|b| b.into_billing()),
        })
    }

    pub async fn get_payment_by_id_impl(&self, id: i64) -> Result<Option<Payment>> {
        let result = Payments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TsmartError::database_operation(format!("Failed to query payment: {e}")))?;

        Ok(result.map(|m| m.into_payment()))
    }

    pub async fn list_payments_with_pagination_impl(
        &self,
        query: PaymentListQuery,
    ) -> Result<PaymentListResponse> {
        let page = std::cmp::max(query.page.unwrap_or(1), 1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Payments::find().find_also_related(Billings);

        if let Some(ref status) = query.status {
            select = select.filter(payments::Column::Status.eq(status.to_string()));
        }

        if let Some(ref method) = query.method {
            select = select.filter(payments::Column::Method.eq(method.to_string()));
        }

        if let Some(billing_id) = query.billing_id {
            select = select.filter(payments::Column::BillingId.eq(billing_id));
        }

        if let Some(student_id) = query.student_id {
            select = select.filter(billings::Column::StudentId.eq(student_id));
        }

        if let Some(ref from) = query.date_from {
            let from_ts = parse_date_lower(from)?;
            select = select.filter(payments::Column::CreatedAt.gte(from_ts));
        }

        if let Some(ref to) = query.date_to {
            let to_ts = parse_date_upper(to)?;
            select = select.filter(payments::Column::CreatedAt.lt(to_ts));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            // Student search goes through the billing -> student join in a
            // subquery; the reference number matches directly.
            select = select.filter(
                Condition::any()
                    .add(payments::Column::ReferenceNumber.contains(&escaped))
                    .add(
                        payments::Column::BillingId.in_subquery(
                            Query::select()
                                .column((billings::Entity, billings::Column::Id))
                                .from(billings::Entity)
                                .inner_join(
                                    students::Entity,
                                    Expr::col((students::Entity, students::Column::Id)).equals((
                                        billings::Entity,
                                        billings::Column::StudentId,
                                    )),
                                )
                                .cond_where(
                                    Condition::any()
                                        .add(
                                            students::Column::FullName
                                                .contains(&escaped),
                                        )
                                        .add(students::Column::Nisn.contains(&escaped)),
                                )
                                .to_owned(),
                        ),
                    ),
            );
        }

        let select = select.order_by_desc(payments::Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to count payments: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to count payment pages: {e}"))
        })?;

        let rows = paginator.fetch_page(page - 1).await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to list payments: {e}"))
        })?;

        // Resolve student names in one batch instead of a join per row.
        let student_ids: Vec<i64> = rows
            .iter()
            .filter_map(|(_, billing)| billing.as_ref().map(|b| b.student_id))
            .collect();
        let student_names: HashMap<i64, String> = if student_ids.is_empty() {
            HashMap::new()
        } else {
            Students::find()
                .filter(students::Column::Id.is_in(student_ids))
                .all(&self.db)
                .await
                .map_err(|e| {
                    TsmartError::database_operation(format!("Failed to query students: {e}"))
                })?
                .into_iter()
                .map(|s| (s.id, s.full_name))
                .collect()
        };

        let items = rows
            .into_iter()
            .map(|(payment, billing)| {
                let (bill_number, student_name) = billing
                    .map(|b| {
                        let name = student_names.get(&b.student_id).cloned().unwrap_or_default();
                        (b.bill_number, name)
                    })
                    .unwrap_or_default();
                PaymentListItem {
                    payment: payment.into_payment(),
                    bill_number,
                    student_name,
                }
            })
            .collect();

        Ok(PaymentListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}

/// Inclusive lower bound, midnight UTC of the given day.
fn parse_date_lower(date: &str) -> Result<i64> {
    let day = date.parse::<NaiveDate>()?;
    Ok(day.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc().timestamp())
}

/// Exclusive upper bound, midnight UTC of the following day.
fn parse_date_upper(date: &str) -> Result<i64> {
    let day = date.parse::<NaiveDate>()?;
    let next = day.succ_opt().unwrap_or(day);
    Ok(next.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc().timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn billing(status: &str, total: i64, paid: i64) -> BillingModel {
        BillingModel {
            id: 1,
            bill_number: "INV/2025/07/0001".to_string(),
            student_id: 1,
            academic_year_id: 1,
            billing_type: "spp".to_string(),
            month: 7,
            year: 2025,
            total_amount: total,
            paid_amount: paid,
            status: status.to_string(),
            due_date: 0,
            description: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_closed_billing_refuses_payment() {
        for status in ["paid", "cancelled", "waived"] {
            let err = check_billing_payable(&billing(status, 500_000, 0), 100_000).unwrap_err();
            assert_eq!(err.code(), "E013");
        }
    }

    #[test]
    fn test_non_positive_amount_refused() {
        let err = check_billing_payable(&billing("billed", 500_000, 0), 0).unwrap_err();
        assert_eq!(err.code(), "E006");
        let err = check_billing_payable(&billing("billed", 500_000, 0), -5).unwrap_err();
        assert_eq!(err.code(), "E006");
    }

    #[test]
    fn test_amount_exceeding_outstanding_refused() {
        let err = check_billing_payable(&billing("partial", 500_000, 200_000), 300_001).unwrap_err();
        assert_eq!(err.code(), "E008");
        // Exactly the outstanding amount is fine.
        assert!(check_billing_payable(&billing("partial", 500_000, 200_000), 300_000).is_ok());
    }

    #[test]
    fn test_date_bounds() {
        let lower = parse_date_lower("2025-07-01").unwrap();
        let upper = parse_date_upper("2025-07-01").unwrap();
        assert_eq!(upper - lower, 86_400);
    }
}
