//! Prospective student application entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "new_students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nisn: String,
    pub full_name: String,
    pub birth_place: Option<String>,
    pub birth_date: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub guardian_name: Option<String>,
    pub registration_paid: bool,
    pub approval_status: String,
    pub user_id: i64,
    pub student_id: Option<i64>,
    pub processed_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
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
    pub fn into_new_student(self) -> crate::models::new_students::entities::NewStudent {
        use crate::models::new_students::entities::{ApprovalStatus, NewStudent};
        use chrono::{DateTime, Utc};

        NewStudent {
            id: self.id,
            nisn: self.nisn,
            full_name: self.full_name,
            birth_place: self.birth_place,
            birth_date: self.birth_date,
            address: self.address,
            phone: self.phone,
            guardian_name: self.guardian_name,
            registration_paid: self.registration_paid,
            approval_status: self
                .approval_status
                .parse::<ApprovalStatus>()
                .unwrap_or(ApprovalStatus::Pending),
            user_id: self.user_id,
            student_id: self.student_id,
            processed_at: self
                .processed_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
