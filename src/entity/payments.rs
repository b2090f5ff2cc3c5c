//! Payment entity: one payment attempt against a single billing

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub reference_number: String,
    pub billing_id: i64,
    pub amount: i64,
    pub admin_fee: i64,
    pub total_paid: i64,
    pub method: String,
    pub status: String,
    pub paid_at: Option<i64>,
    pub verified_by: Option<i64>,
    pub notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::billings::Entity",
        from = "Column::BillingId",
        to = "super::billings::Column::Id"
    )]
    Billing,
}

impl Related<super::billings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Billing.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_payment(self) -> crate::models::payments::entities::Payment {
        use crate::models::payments::entities::{Payment, PaymentMethod, PaymentStatus};
        use chrono::{DateTime, Utc};

        Payment {
            id: self.id,
            reference_number: self.reference_number,
            billing_id: self.billing_id,
            amount: self.amount,
            admin_fee: self.admin_fee,
            total_paid: self.total_paid,
            method: self
                .method
                .parse::<PaymentMethod>()
                .unwrap_or(PaymentMethod::Cash),
            status: self
                .status
                .parse::<PaymentStatus>()
                .unwrap_or(PaymentStatus::Pending),
            paid_at: self
                .paid_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            verified_by: self.verified_by,
            notes: self.notes,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
