use crate::database::dto::{NewApplication, UpdateApplication};
use crate::entity::prelude::*;
use crate::entity::{application, student};
use crate::error::{Result, SchemaError};
use sea_orm::*;

const ENTITY: &str = "application";

/// Application repository
pub struct ApplicationsRepository;

impl ApplicationsRepository {
    // ==================== CRUD ====================

    /// Insert an application. Student and internship must exist.
    pub async fn create(
        db: &DatabaseConnection,
        application: NewApplication,
    ) -> Result<application::Model> {
        let application_active = application::ActiveModel {
            id: NotSet,
            student_id: Set(application.student_id),
            internship_id: Set(application.internship_id),
            application_date: Set(application.application_date),
            status: Set(application.status),
        };

        application_active
            .insert(db)
            .await
            .map_err(|e| SchemaError::from_db(ENTITY, e))
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<application::Model>> {
        Ok(Applications::find_by_id(id).one(db).await?)
    }

    /// All applications by application date.
    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<application::Model>> {
        Ok(Applications::find_ordered()
            .order_by_asc(application::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn find_by_student(
        db: &DatabaseConnection,
        student_id: i32,
    ) -> Result<Vec<application::Model>> {
        Ok(Applications::find_ordered()
            .filter(application::Column::StudentId.eq(student_id))
            .order_by_asc(application::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn find_by_internship(
        db: &DatabaseConnection,
        internship_id: i32,
    ) -> Result<Vec<application::Model>> {
        Ok(Applications::find_ordered()
            .filter(application::Column::InternshipId.eq(internship_id))
            .order_by_asc(application::Column::Id)
            .all(db)
            .await?)
    }

    /// An application together with its student, which is how it is displayed.
    pub async fn find_with_student(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<(application::Model, Option<student::Model>)>> {
        Ok(Applications::find_by_id(id)
            .find_also_related(Students)
            .one(db)
            .await?)
    }

    /// Partial update. Status may move in any direction.
    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        updates: UpdateApplication,
    ) -> Result<application::Model> {
        let existing = Applications::find_by_id(id)
            .one(db)
            .await?
            .ok_or(SchemaError::NotFound { entity: ENTITY, id })?;

        let mut active: application::ActiveModel = existing.clone().into();

        if let Some(student_id) = updates.student_id {
            active.student_id = Set(student_id);
        }
        if let Some(internship_id) = updates.internship_id {
            active.internship_id = Set(internship_id);
        }
        if let Some(application_date) = updates.application_date {
            active.application_date = Set(application_date);
        }
        if let Some(status) = updates.status {
            active.status = Set(status);
        }

        if !active.is_changed() {
            return Ok(existing);
        }

        active
            .update(db)
            .await
            .map_err(|e| SchemaError::from_db(ENTITY, e))
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<u64> {
        let result = Applications::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected)
    }

    pub async fn count(db: &DatabaseConnection) -> Result<u64> {
        Ok(Applications::find().count(db).await?)
    }
}
