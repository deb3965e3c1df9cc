//! Application entity: a student applying to an internship.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::choices::ApplicationStatus;
use super::meta::EntityMeta;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "applications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub student_id: i32,
    pub internship_id: i32,
    pub application_date: Date,
    pub status: ApplicationStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::internship::Entity",
        from = "Column::InternshipId",
        to = "super::internship::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Internship,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::internship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Internship.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl EntityMeta for Entity {
    const VERBOSE_NAME: &'static str = "Заявка";
    const VERBOSE_NAME_PLURAL: &'static str = "Заявки";

    fn default_ordering() -> Column {
        Column::ApplicationDate
    }

    fn field_label(column: Column) -> &'static str {
        match column {
            Column::Id => "ID",
            Column::StudentId => "student",
            Column::InternshipId => "internship",
            Column::ApplicationDate => "Дата подачи заявки",
            Column::Status => "Статус заявки",
        }
    }
}
