//! Student entity
//!
//! Parent of applications, reports and reviews.

use std::fmt;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::meta::EntityMeta;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub first_name: String,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub last_name: String,
    #[sea_orm(column_type = "String(StringLen::N(255))", unique)]
    pub email: String,
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub phone: String,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub university: String,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub faculty: String,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub specialty: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::application::Entity")]
    Applications,
    #[sea_orm(has_many = "super::report::Entity")]
    Reports,
    #[sea_orm(has_many = "super::review::Entity")]
    Reviews,
}

impl Related<super::application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applications.def()
    }
}

impl Related<super::report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reports.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl EntityMeta for Entity {
    const VERBOSE_NAME: &'static str = "Студент";
    const VERBOSE_NAME_PLURAL: &'static str = "Студенты";

    fn default_ordering() -> Column {
        Column::LastName
    }

    fn field_label(column: Column) -> &'static str {
        match column {
            Column::Id => "ID",
            Column::FirstName => "Имя",
            Column::LastName => "Фамилия",
            Column::Email => "Email",
            Column::Phone => "Телефон",
            Column::University => "Университет",
            Column::Faculty => "Факультет",
            Column::Specialty => "Специальность",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}
