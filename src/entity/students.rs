//! Student entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub nisn: String,
    pub full_name: String,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub guardian_name: Option<String>,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::billings::Entity")]
    Billings,
    #[sea_orm(has_many = "super::student_classes::Entity")]
    StudentClasses,
}

impl Related<super::billings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Billings.def()
    }
}

impl Related<super::student_classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentClasses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_student(self) -> crate::models::students::entities::Student {
        use crate::models::students::entities::{Student, StudentStatus};
        use chrono::{DateTime, Utc};

        Student {
            id: self.id,
            nisn: self.nisn,
            full_name: self.full_name,
            gender: self.gender,
            address: self.address,
            phone: self.phone,
            guardian_name: self.guardian_name,
            status: self
                .status
                .parse::<StudentStatus>()
                .unwrap_or(StudentStatus::Archived),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
