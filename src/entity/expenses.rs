//! Expense entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub category: String,
    pub amount: i64,
    pub expense_date: i64,
    pub description: Option<String>,
    pub recorded_by: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::RecordedBy",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_expense(self) -> crate::models::expenses::entities::Expense {
        use crate::models::expenses::entities::{Expense, ExpenseCategory};
        use chrono::{DateTime, Utc};

        Expense {
            id: self.id,
            title: self.title,
            category: self
                .category
                .parse::<ExpenseCategory>()
                .unwrap_or(ExpenseCategory::Other),
            amount: self.amount,
            expense_date: DateTime::<Utc>::from_timestamp(self.expense_date, 0).unwrap_or_default(),
            description: self.description,
            recorded_by: self.recorded_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
