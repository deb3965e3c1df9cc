//! Employer entity

use std::fmt;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::meta::EntityMeta;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub company_name: String,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub contact_person: String,
    #[sea_orm(column_type = "String(StringLen::N(255))", unique)]
    pub email: String,
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub phone: String,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub industry: String,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub location: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::internship::Entity")]
    Internships,
    #[sea_orm(has_many = "super::report::Entity")]
    Reports,
    #[sea_orm(has_many = "super::review::Entity")]
    Reviews,
}

impl Related<super::internship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Internships.def()
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
    const VERBOSE_NAME: &'static str = "Работодатель";
    const VERBOSE_NAME_PLURAL: &'static str = "Работодатели";

    fn default_ordering() -> Column {
        Column::CompanyName
    }

    fn field_label(column: Column) -> &'static str {
        match column {
            Column::Id => "ID",
            Column::CompanyName => "Название компании",
            Column::ContactPerson => "Контактное лицо",
            Column::Email => "Email",
            Column::Phone => "Телефон",
            Column::Industry => "Отрасль",
            Column::Location => "Местоположение компании",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.company_name)
    }
}
