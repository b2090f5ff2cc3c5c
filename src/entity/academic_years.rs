//! Academic year entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "academic_years")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    pub is_active: bool,
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
    pub fn into_academic_year(self) -> crate::models::academic::entities::AcademicYear {
        use crate::models::academic::entities::AcademicYear;
        use chrono::{DateTime, Utc};

        AcademicYear {
            id: self.id,
            name: self.name,
            is_active: self.is_active,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
