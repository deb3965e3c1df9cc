use crate::database::dto::{NewInternship, UpdateInternship};
use crate::database::validation::require_date_order;
use crate::entity::internship;
use crate::entity::prelude::*;
use crate::error::{Result, SchemaError};
use sea_orm::*;

const ENTITY: &str = "internship";

/// Internship repository
pub struct InternshipsRepository;

impl InternshipsRepository {
    // ==================== CRUD ====================

    /// Insert an internship. The employer must exist.
    pub async fn create(
        db: &DatabaseConnection,
        internship: NewInternship,
    ) -> Result<internship::Model> {
        internship.validate()?;

        let internship_active = internship::ActiveModel {
            id: NotSet,
            employer_id: Set(internship.employer_id),
            position: Set(internship.position),
            start_date: Set(internship.start_date),
            end_date: Set(internship.end_date),
            description: Set(internship.description),
            status: Set(internship.status),
        };

        internship_active
            .insert(db)
            .await
            .map_err(|e| SchemaError::from_db(ENTITY, e))
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<internship::Model>> {
        Ok(Internships::find_by_id(id).one(db).await?)
    }

    /// All internships by start date.
    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<internship::Model>> {
        Ok(Internships::find_ordered()
            .order_by_asc(internship::Column::Id)
            .all(db)
            .await?)
    }

    /// Internships offered by one employer.
    pub async fn find_by_employer(
        db: &DatabaseConnection,
        employer_id: i32,
    ) -> Result<Vec<internship::Model>> {
        Ok(Internships::find_ordered()
            .filter(internship::Column::EmployerId.eq(employer_id))
            .order_by_asc(internship::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn find_by_status(
        db: &DatabaseConnection,
        status: InternshipStatus,
    ) -> Result<Vec<internship::Model>> {
        Ok(Internships::find_ordered()
            .filter(internship::Column::Status.eq(status))
            .order_by_asc(internship::Column::Id)
            .all(db)
            .await?)
    }

    /// Partial update. The resulting start and end dates must still be ordered;
    /// any status change is allowed.
    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        updates: UpdateInternship,
    ) -> Result<internship::Model> {
        updates.validate()?;

        let existing = Internships::find_by_id(id)
            .one(db)
            .await?
            .ok_or(SchemaError::NotFound { entity: ENTITY, id })?;

        require_date_order(
            updates.start_date.unwrap_or(existing.start_date),
            updates.end_date.unwrap_or(existing.end_date),
        )?;

        let mut active: internship::ActiveModel = existing.clone().into();

        if let Some(employer_id) = updates.employer_id {
            active.employer_id = Set(employer_id);
        }
        if let Some(position) = updates.position {
            active.position = Set(position);
        }
        if let Some(start_date) = updates.start_date {
            active.start_date = Set(start_date);
        }
        if let Some(end_date) = updates.end_date {
            active.end_date = Set(end_date);
        }
        if let Some(description) = updates.description {
            active.description = Set(description);
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

    /// Delete an internship with its applications, reports and reviews.
    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<u64> {
        let result = Internships::delete_by_id(id).exec(db).await?;
        if result.rows_affected > 0 {
            log::info!("Deleted internship {}", id);
        }
        Ok(result.rows_affected)
    }

    pub async fn count(db: &DatabaseConnection) -> Result<u64> {
        Ok(Internships::find().count(db).await?)
    }
}
