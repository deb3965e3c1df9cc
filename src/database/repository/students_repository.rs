use crate::database::dto::{NewStudent, UpdateStudent};
use crate::entity::prelude::*;
use crate::entity::student;
use crate::error::{Result, SchemaError};
use sea_orm::*;

const ENTITY: &str = "student";

/// Student repository
pub struct StudentsRepository;

impl StudentsRepository {
    // ==================== CRUD ====================

    /// Insert a student. A duplicate email is rejected by the unique index.
    pub async fn create(db: &DatabaseConnection, student: NewStudent) -> Result<student::Model> {
        student.validate()?;

        let student_active = student::ActiveModel {
            id: NotSet,
            first_name: Set(student.first_name),
            last_name: Set(student.last_name),
            email: Set(student.email),
            phone: Set(student.phone),
            university: Set(student.university),
            faculty: Set(student.faculty),
            specialty: Set(student.specialty),
        };

        student_active
            .insert(db)
            .await
            .map_err(|e| SchemaError::from_db(ENTITY, e))
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<student::Model>> {
        Ok(Students::find_by_id(id).one(db).await?)
    }

    /// All students by last name.
    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<student::Model>> {
        Ok(Students::find_ordered()
            .order_by_asc(student::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn find_by_email(
        db: &DatabaseConnection,
        email: &str,
    ) -> Result<Option<student::Model>> {
        Ok(Students::find()
            .filter(student::Column::Email.eq(email))
            .one(db)
            .await?)
    }

    /// Partial update; fields left as `None` keep their value.
    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        updates: UpdateStudent,
    ) -> Result<student::Model> {
        updates.validate()?;

        let existing = Students::find_by_id(id)
            .one(db)
            .await?
            .ok_or(SchemaError::NotFound { entity: ENTITY, id })?;

        let mut active: student::ActiveModel = existing.clone().into();

        if let Some(first_name) = updates.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = updates.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(email) = updates.email {
            active.email = Set(email);
        }
        if let Some(phone) = updates.phone {
            active.phone = Set(phone);
        }
        if let Some(university) = updates.university {
            active.university = Set(university);
        }
        if let Some(faculty) = updates.faculty {
            active.faculty = Set(faculty);
        }
        if let Some(specialty) = updates.specialty {
            active.specialty = Set(specialty);
        }

        if !active.is_changed() {
            return Ok(existing);
        }

        active
            .update(db)
            .await
            .map_err(|e| SchemaError::from_db(ENTITY, e))
    }

    /// Delete a student together with their applications, reports and reviews.
    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<u64> {
        let result = Students::delete_by_id(id).exec(db).await?;
        if result.rows_affected > 0 {
            log::info!("Deleted student {}", id);
        }
        Ok(result.rows_affected)
    }

    pub async fn count(db: &DatabaseConnection) -> Result<u64> {
        Ok(Students::find().count(db).await?)
    }
}
