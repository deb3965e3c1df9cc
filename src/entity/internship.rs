//! Internship entity
//!
//! Owned by an employer. `start_date <= end_date` is checked on every save
//! and by a table CHECK constraint.

use std::fmt;

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;
use serde::{Deserialize, Serialize};

use super::choices::InternshipStatus;
use super::meta::EntityMeta;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "internships")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub employer_id: i32,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub position: String,
    pub start_date: Date,
    pub end_date: Date,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub status: InternshipStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employer::Entity",
        from = "Column::EmployerId",
        to = "super::employer::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Employer,
    #[sea_orm(has_many = "super::application::Entity")]
    Applications,
    #[sea_orm(has_many = "super::report::Entity")]
    Reports,
    #[sea_orm(has_many = "super::review::Entity")]
    Reviews,
}

impl Related<super::employer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employer.def()
    }
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

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Rejects inverted dates on writes that bypass `InternshipsRepository`.
    /// Fails with `DbErr::Custom`, which surfaces as `SchemaError::Db`;
    /// repository writes are rejected earlier with `SchemaError::Validation`.
    async fn before_save<C>(self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let (
            ActiveValue::Set(start) | ActiveValue::Unchanged(start),
            ActiveValue::Set(end) | ActiveValue::Unchanged(end),
        ) = (&self.start_date, &self.end_date)
        {
            if start > end {
                return Err(DbErr::Custom(format!(
                    "internship start date {start} is after end date {end}"
                )));
            }
        }
        Ok(self)
    }
}

impl EntityMeta for Entity {
    const VERBOSE_NAME: &'static str = "Стажировка";
    const VERBOSE_NAME_PLURAL: &'static str = "Стажировки";

    fn default_ordering() -> Column {
        Column::StartDate
    }

    fn field_label(column: Column) -> &'static str {
        match column {
            Column::Id => "ID",
            Column::EmployerId => "employer",
            Column::Position => "Должность на стажировке",
            Column::StartDate => "Дата начала",
            Column::EndDate => "Дата окончания",
            Column::Description => "Описание стажировки",
            Column::Status => "Статус",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} - {})", self.position, self.start_date, self.end_date)
    }
}
