//! School class entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "school_classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    pub level: Option<String>,
    pub spp_amount: i64,
    pub homeroom_teacher: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student_classes::Entity")]
    StudentClasses,
}

impl Related<super::student_classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentClasses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_school_class(self) -> crate::models::academic::entities::SchoolClass {
        use crate::models::academic::entities::SchoolClass;
        use chrono::{DateTime, Utc};

        SchoolClass {
            id: self.id,
            name: self.name,
            level: self.level,
            spp_amount: self.spp_amount,
            homeroom_teacher: self.homeroom_teacher,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
