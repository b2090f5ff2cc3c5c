//! Billing entity: one tuition/fee obligation per student per period/type

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "billings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub bill_number: String,
    pub student_id: i64,
    pub academic_year_id: i64,
    pub billing_type: String,
    pub month: i32,
    pub year: i32,
    pub total_amount: i64,
    pub paid_amount: i64,
    pub status: String,
    pub due_date: i64,
    pub description: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::academic_years::Entity",
        from = "Column::AcademicYearId",
        to = "super::academic_years::Column::Id"
    )]
    AcademicYear,
    #[sea_orm(has_many = "super::payments::Entity")]
    Payments,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::academic_years::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AcademicYear.def()
    }
}

impl Related<super::payments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert into the business model. A stored `billed` status whose due
    /// date has passed is surfaced as `overdue`; the write path recomputes
    /// status from amounts and never reads it back from here.
    pub fn into_billing(self) -> crate::models::billings::entities::Billing {
        use crate::models::billings::entities::{Billing, BillingStatus, BillingType};
        use chrono::{DateTime, Utc};

        let stored = self
            .status
            .parse::<BillingStatus>()
            .unwrap_or(BillingStatus::Unbilled);
        let status = stored.effective(self.due_date, Utc::now().timestamp());

        Billing {
            id: self.id,
            bill_number: self.bill_number,
            student_id: self.student_id,
            academic_year_id: self.academic_year_id,
            billing_type: self
                .billing_type
                .parse::<BillingType>()
                .unwrap_or(BillingType::Spp),
            month: self.month as u32,
            year: self.year,
            total_amount: self.total_amount,
            paid_amount: self.paid_amount,
            status,
            due_date: DateTime::<Utc>::from_timestamp(self.due_date, 0).unwrap_or_default(),
            description: self.description,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
