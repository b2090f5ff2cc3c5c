use super::SeaOrmStorage;
use crate::entity::prelude::{BillingActiveModel, Billings, Payments, Students};
use crate::entity::{billings, payments, student_classes, students};
use crate::errors::{Result, TsmartError};
use crate::models::{
    PaginationInfo,
    billings::{
        entities::{Billing, BillingStatus, BillingType, format_bill_number},
        requests::{BillingListQuery, GenerateBillingsRequest},
        responses::{
            BillingDetailResponse, BillingListItem, BillingListResponse, BillingSummary,
            FailedBilling, GenerateBillingsResponse, GeneratedBilling, SkippedBilling, StatusCount,
        },
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::sea_query::{Expr, ExprTrait, Query};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, FromQueryResult, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};

/// Appends the COUNT/SUM aggregate columns shared by the status summary
/// queries.
fn with_agg_columns(select: sea_orm::Select<Billings>) -> sea_orm::Select<Billings> {
    select
        .column_as(
            Expr::col((billings::Entity, billings::Column::Id)).count(),
            "count",
        )
        .column_as(
            Expr::col((billings::Entity, billings::Column::TotalAmount)).sum(),
            "total_amount",
        )
        .column_as(
            Expr::col((billings::Entity, billings::Column::PaidAmount)).sum(),
            "paid_amount",
        )
}

#[derive(Debug, FromQueryResult)]
struct StatusAggRow {
    status: String,
    count: i64,
    total_amount: Option<i64>,
    paid_amount: Option<i64>,
}

/// Filter condition shared by the list query and the summary aggregation.
/// Requires the student join to be present for the search branch. The
/// `overdue`/`billed` status filters split the stored `billed` status on the
/// due date, matching the effective status surfaced to clients.
fn billing_filter_condition(query: &BillingListQuery, now: i64) -> Condition {
    let mut cond = Condition::all();

    if let Some(ref status) = query.status {
        cond = match status {
            BillingStatus::Overdue => cond
                .add(billings::Column::Status.eq(BillingStatus::Billed.to_string()))
                .add(billings::Column::DueDate.lt(now)),
            BillingStatus::Billed => cond
                .add(billings::Column::Status.eq(BillingStatus::Billed.to_string()))
                .add(billings::Column::DueDate.gte(now)),
            other => cond.add(billings::Column::Status.eq(other.to_string())),
        };
    }

    if let Some(ref billing_type) = query.billing_type {
        cond = cond.add(billings::Column::BillingType.eq(billing_type.to_string()));
    }

    if let Some(month) = query.month {
        cond = cond.add(billings::Column::Month.eq(month as i32));
    }

    if let Some(year) = query.year {
        cond = cond.add(billings::Column::Year.eq(year));
    }

    if let Some(academic_year_id) = query.academic_year_id {
        cond = cond.add(billings::Column::AcademicYearId.eq(academic_year_id));
    }

    if let Some(student_id) = query.student_id {
        cond = cond.add(billings::Column::StudentId.eq(student_id));
    }

    if let Some(class_id) = query.class_id {
        cond = cond.add(
            billings::Column::StudentId.in_subquery(
                Query::select()
                    .column(student_classes::Column::StudentId)
                    .from(student_classes::Entity)
                    .and_where(student_classes::Column::ClassId.eq(class_id))
                    .to_owned(),
            ),
        );
    }

    if let Some(ref search) = query.search
        && !search.trim().is_empty()
    {
        let escaped = escape_like_pattern(search.trim());
        cond = cond.add(
            Condition::any()
                .add(students::Column::FullName.contains(&escaped))
                .add(students::Column::Nisn.contains(&escaped))
                .add(billings::Column::BillNumber.contains(&escaped)),
        );
    }

    cond
}

impl SeaOrmStorage {
    /// Batch generation over active enrollments. Best-effort: an existing
    /// billing for the period skips the student, an insert failure is
    /// recorded per student without aborting the batch.
    pub async fn generate_billings_impl(
        &self,
        req: GenerateBillingsRequest,
        default_amount: i64,
        due_date_ts: i64,
    ) -> Result<GenerateBillingsResponse> {
        let now = chrono::Utc::now().timestamp();

        let enrollments = self
            .list_active_enrollments_impl(req.academic_year_id, req.class_ids.clone())
            .await?;

        // Bill numbers are sequential within the billing month.
        let issued = Billings::find()
            .filter(billings::Column::Month.eq(req.month as i32))
            .filter(billings::Column::Year.eq(req.year))
            .count(&self.db)
            .await
            .map_err(|e| {
                TsmartError::database_operation(format!("Failed to count billings: {e}"))
            })?;
        let mut next_seq = issued + 1;

        let mut created = Vec::new();
        let mut skipped = Vec::new();
        let mut failed = Vec::new();

        for enrollment in enrollments {
            let existing = Billings::find()
                .filter(billings::Column::StudentId.eq(enrollment.student_id))
                .filter(billings::Column::BillingType.eq(req.billing_type.to_string()))
                .filter(billings::Column::Month.eq(req.month as i32))
                .filter(billings::Column::Year.eq(req.year))
                .filter(billings::Column::AcademicYearId.eq(req.academic_year_id))
                .one(&self.db)
                .await;

            match existing {
                Ok(Some(_)) => {
                    skipped.push(SkippedBilling {
                        student_id: enrollment.student_id,
                        student_name: enrollment.student_name,
                        reason: "billing for this period already exists".to_string(),
                    });
                    continue;
                }
                Ok(None) => {}
                Err(e) => {
                    failed.push(FailedBilling {
                        student_id: enrollment.student_id,
                        student_name: enrollment.student_name,
                        error: e.to_string(),
                    });
                    continue;
                }
            }

            let amount = req.amount.unwrap_or(match req.billing_type {
                BillingType::Spp if enrollment.spp_amount > 0 => enrollment.spp_amount,
                _ => default_amount,
            });

            let bill_number = format_bill_number(req.year, req.month, next_seq);

            let model = BillingActiveModel {
                bill_number: Set(bill_number.clone()),
                student_id: Set(enrollment.student_id),
                academic_year_id: Set(req.academic_year_id),
                billing_type: Set(req.billing_type.to_string()),
                month: Set(req.month as i32),
                year: Set(req.year),
                total_amount: Set(amount),
                paid_amount: Set(0),
                status: Set(BillingStatus::Billed.to_string()),
                due_date: Set(due_date_ts),
                description: Set(req.description.clone()),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            };

            match model.insert(&self.db).await {
                Ok(_) => {
                    next_seq += 1;
                    created.push(GeneratedBilling {
                        student_id: enrollment.student_id,
                        student_name: enrollment.student_name,
                        bill_number,
                        amount,
                    });
                }
                Err(e) => {
                    failed.push(FailedBilling {
                        student_id: enrollment.student_id,
                        student_name: enrollment.student_name,
                        error: e.to_string(),
                    });
                }
            }
        }

        Ok(GenerateBillingsResponse {
            created,
            skipped,
            failed,
        })
    }

    pub async fn get_billing_by_id_impl(&self, id: i64) -> Result<Option<Billing>> {
        let result = Billings::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TsmartError::database_operation(format!("Failed to query billing: {e}")))?;

        Ok(result.map(|m| m.into_billing()))
    }

    pub async fn get_billing_detail_impl(&self, id: i64) -> Result<Option<BillingDetailResponse>> {
        let Some((billing, student)) = Billings::find_by_id(id)
            .find_also_related(Students)
            .one(&self.db)
            .await
            .map_err(|e| TsmartError::database_operation(format!("Failed to query billing: {e}")))?
        else {
            return Ok(None);
        };

        let history = Payments::find()
            .filter(payments::Column::BillingId.eq(id))
            .order_by_desc(payments::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                TsmartError::database_operation(format!("Failed to query payment history: {e}"))
            })?;

        let (student_name, nisn) = student
            .map(|s| (s.full_name, s.nisn))
            .unwrap_or_default();

        Ok(Some(BillingDetailResponse {
            billing: billing.into_billing(),
            student_name,
            nisn,
            payments: history.into_iter().map(|m| m.into_payment()).collect(),
        }))
    }

    pub async fn list_billings_with_pagination_impl(
        &self,
        query: BillingListQuery,
    ) -> Result<BillingListResponse> {
        let page = std::cmp::max(query.page.unwrap_or(1), 1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;
        let now = chrono::Utc::now().timestamp();

        let cond = billing_filter_condition(&query, now);

        let select = Billings::find()
            .find_also_related(Students)
            .filter(cond.clone())
            .order_by_desc(billings::Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to count billings: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to count billing pages: {e}"))
        })?;

        let rows = paginator.fetch_page(page - 1).await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to list billings: {e}"))
        })?;

        let items = rows
            .into_iter()
            .map(|(billing, student)| {
                let (student_name, nisn) = student
                    .map(|s| (s.full_name, s.nisn))
                    .unwrap_or_default();
                BillingListItem {
                    billing: billing.into_billing(),
                    student_name,
                    nisn,
                }
            })
            .collect();

        let summary = self.billing_summary_for_condition(cond, now).await?;

        Ok(BillingListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
            summary,
        })
    }

    /// SQL group-by aggregation over the filtered set. The stored `billed`
    /// bucket is split into `billed`/`overdue` on the due date.
    pub(crate) async fn billing_summary_for_condition(
        &self,
        cond: Condition,
        now: i64,
    ) -> Result<BillingSummary> {
        let groups = with_agg_columns(
            Billings::find()
                .join(
                    sea_orm::JoinType::InnerJoin,
                    billings::Relation::Student.def(),
                )
                .filter(cond.clone())
                .select_only()
                .column(billings::Column::Status),
        )
            .group_by(billings::Column::Status)
            .into_model::<StatusAggRow>()
            .all(&self.db)
            .await
            .map_err(|e| {
                TsmartError::database_operation(format!("Failed to aggregate billings: {e}"))
            })?;

        let overdue = with_agg_columns(
            Billings::find()
                .join(
                    sea_orm::JoinType::InnerJoin,
                    billings::Relation::Student.def(),
                )
                .filter(cond)
                .filter(billings::Column::Status.eq(BillingStatus::Billed.to_string()))
                .filter(billings::Column::DueDate.lt(now))
                .select_only()
                .column_as(
                    Expr::col((billings::Entity, billings::Column::Status)).max(),
                    "status",
                ),
        )
            .into_model::<StatusAggRow>()
            .one(&self.db)
            .await
            .map_err(|e| {
                TsmartError::database_operation(format!("Failed to aggregate overdue billings: {e}"))
            })?;

        let mut status_counts: Vec<StatusCount> = Vec::new();
        let mut total_amount = 0i64;
        let mut paid_amount = 0i64;
        let mut outstanding_amount = 0i64;

        for row in groups {
            let total = row.total_amount.unwrap_or(0);
            let paid = row.paid_amount.unwrap_or(0);
            total_amount += total;
            paid_amount += paid;

            let stored: BillingStatus = row
                .status
                .parse()
                .unwrap_or(BillingStatus::Unbilled);
            if !stored.is_closed() {
                outstanding_amount += std::cmp::max(total - paid, 0);
            }

            status_counts.push(StatusCount {
                status: row.status,
                count: row.count,
                total_amount: total,
                paid_amount: paid,
            });
        }

        // Split the billed bucket into billed/overdue.
        if let Some(over) = overdue
            && over.count > 0
        {
            let over_total = over.total_amount.unwrap_or(0);
            let over_paid = over.paid_amount.unwrap_or(0);

            if let Some(billed) = status_counts
                .iter_mut()
                .find(|s| s.status == BillingStatus::Billed.to_string())
            {
                billed.count -= over.count;
                billed.total_amount -= over_total;
                billed.paid_amount -= over_paid;
            }
            status_counts.retain(|s| s.count > 0);
            status_counts.push(StatusCount {
                status: BillingStatus::Overdue.to_string(),
                count: over.count,
                total_amount: over_total,
                paid_amount: over_paid,
            });
        }

        Ok(BillingSummary {
            total_amount,
            paid_amount,
            outstanding_amount,
            status_counts,
        })
    }

    /// Cancel is only allowed while nothing has been paid.
    pub async fn cancel_billing_impl(&self, id: i64) -> Result<Billing> {
        let billing = Billings::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TsmartError::database_operation(format!("Failed to query billing: {e}")))?
            .ok_or_else(|| TsmartError::not_found(format!("Billing {id} not found")))?;

        let status: BillingStatus = billing.status.parse().unwrap_or(BillingStatus::Unbilled);
        if status != BillingStatus::Billed || billing.paid_amount > 0 {
            return Err(TsmartError::invalid_transition(format!(
                "Billing {} cannot be cancelled from status {} with paid amount {}",
                billing.bill_number, billing.status, billing.paid_amount
            )));
        }

        let updated = BillingActiveModel {
            id: Set(id),
            status: Set(BillingStatus::Cancelled.to_string()),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| TsmartError::database_operation(format!("Failed to cancel billing: {e}")))?;

        Ok(updated.into_billing())
    }

    /// Waive forgives the outstanding remainder of an open billing.
    pub async fn waive_billing_impl(&self, id: i64) -> Result<Billing> {
        let billing = Billings::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TsmartError::database_operation(format!("Failed to query billing: {e}")))?
            .ok_or_else(|| TsmartError::not_found(format!("Billing {id} not found")))?;

        let status: BillingStatus = billing.status.parse().unwrap_or(BillingStatus::Unbilled);
        if !matches!(status, BillingStatus::Billed | BillingStatus::Partial) {
            return Err(TsmartError::invalid_transition(format!(
                "Billing {} cannot be waived from status {}",
                billing.bill_number, billing.status
            )));
        }

        let updated = BillingActiveModel {
            id: Set(id),
            status: Set(BillingStatus::Waived.to_string()),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| TsmartError::database_operation(format!("Failed to waive billing: {e}")))?;

        Ok(updated.into_billing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    #[test]
    fn test_summary_aggregates_render_count_and_sum() {
        let sql = with_agg_columns(
            Billings::find()
                .select_only()
                .column(billings::Column::Status),
        )
        .group_by(billings::Column::Status)
        .build(DbBackend::Sqlite)
        .to_string();

        assert!(sql.contains("COUNT("));
        assert!(sql.contains("SUM("));
        assert!(sql.contains("GROUP BY"));
    }

    #[test]
    fn test_overdue_filter_splits_billed_on_due_date() {
        let now = 1_750_000_000;

        let overdue = BillingListQuery {
            status: Some(BillingStatus::Overdue),
            ..Default::default()
        };
        let sql = Billings::find()
            .filter(billing_filter_condition(&overdue, now))
            .build(DbBackend::Sqlite)
            .to_string();
        assert!(sql.contains("'billed'"));
        assert!(sql.contains("\"due_date\" < "));

        let billed = BillingListQuery {
            status: Some(BillingStatus::Billed),
            ..Default::default()
        };
        let sql = Billings::find()
            .filter(billing_filter_condition(&billed, now))
            .build(DbBackend::Sqlite)
            .to_string();
        assert!(sql.contains("\"due_date\" >= "));
    }
}
