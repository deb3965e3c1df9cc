use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::choices::Rating;
use super::meta::EntityMeta;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub internship_id: i32,
    pub student_id: i32,
    pub employer_id: i32,
    pub rating: Rating,
    #[sea_orm(column_type = "Text")]
    pub feedback: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::internship::Entity",
        from = "Column::InternshipId",
        to = "super::internship::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Internship,
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::employer::Entity",
        from = "Column::EmployerId",
        to = "super::employer::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Employer,
}

impl Related<super::internship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Internship.def()
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::employer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl EntityMeta for Entity {
    const VERBOSE_NAME: &'static str = "Отзыв";
    const VERBOSE_NAME_PLURAL: &'static str = "Отзывы";

    fn default_ordering() -> Column {
        Column::Rating
    }

    fn field_label(column: Column) -> &'static str {
        match column {
            Column::Id => "ID",
            Column::InternshipId => "internship",
            Column::StudentId => "student",
            Column::EmployerId => "employer",
            Column::Rating => "Оценка",
            Column::Feedback => "Отзыв",
        }
    }
}
