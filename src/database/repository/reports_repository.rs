use crate::database::dto::{NewReport, UpdateReport};
use crate::entity::prelude::*;
use crate::entity::{report, student};
use crate::error::{Result, SchemaError};
use sea_orm::*;

const ENTITY: &str = "report";

/// Internship report repository
pub struct ReportsRepository;

impl ReportsRepository {
    // ==================== CRUD ====================

    /// Insert a report. Internship, student and employer must all exist.
    pub async fn create(db: &DatabaseConnection, report: NewReport) -> Result<report::Model> {
        report.validate()?;

        let report_active = report::ActiveModel {
            id: NotSet,
            internship_id: Set(report.internship_id),
            student_id: Set(report.student_id),
            employer_id: Set(report.employer_id),
            submission_date: Set(report.submission_date),
            content: Set(report.content),
            rating: Set(report.rating),
        };

        report_active
            .insert(db)
            .await
            .map_err(|e| SchemaError::from_db(ENTITY, e))
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<report::Model>> {
        Ok(Reports::find_by_id(id).one(db).await?)
    }

    /// All reports by submission date.
    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<report::Model>> {
        Ok(Reports::find_ordered()
            .order_by_asc(report::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn find_by_internship(
        db: &DatabaseConnection,
        internship_id: i32,
    ) -> Result<Vec<report::Model>> {
        Self::find_filtered(db, report::Column::InternshipId.eq(internship_id)).await
    }

    pub async fn find_by_student(
        db: &DatabaseConnection,
        student_id: i32,
    ) -> Result<Vec<report::Model>> {
        Self::find_filtered(db, report::Column::StudentId.eq(student_id)).await
    }

    pub async fn find_by_employer(
        db: &DatabaseConnection,
        employer_id: i32,
    ) -> Result<Vec<report::Model>> {
        Self::find_filtered(db, report::Column::EmployerId.eq(employer_id)).await
    }

    /// A report together with its student, which is how it is displayed.
    pub async fn find_with_student(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<(report::Model, Option<student::Model>)>> {
        Ok(Reports::find_by_id(id)
            .find_also_related(Students)
            .one(db)
            .await?)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        updates: UpdateReport,
    ) -> Result<report::Model> {
        updates.validate()?;

        let existing = Reports::find_by_id(id)
            .one(db)
            .await?
            .ok_or(SchemaError::NotFound { entity: ENTITY, id })?;

        let mut active: report::ActiveModel = existing.clone().into();

        if let Some(internship_id) = updates.internship_id {
            active.internship_id = Set(internship_id);
        }
        if let Some(student_id) = updates.student_id {
            active.student_id = Set(student_id);
        }
        if let Some(employer_id) = updates.employer_id {
            active.employer_id = Set(employer_id);
        }
        if let Some(submission_date) = updates.submission_date {
            active.submission_date = Set(submission_date);
        }
        if let Some(content) = updates.content {
            active.content = Set(content);
        }
        if let Some(rating) = updates.rating {
            active.rating = Set(rating);
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
        let result = Reports::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected)
    }

    pub async fn count(db: &DatabaseConnection) -> Result<u64> {
        Ok(Reports::find().count(db).await?)
    }

    // ==================== Private ====================

    async fn find_filtered(
        db: &DatabaseConnection,
        condition: sea_query::SimpleExpr,
    ) -> Result<Vec<report::Model>> {
        Ok(Reports::find_ordered()
            .filter(condition)
            .order_by_asc(report::Column::Id)
            .all(db)
            .await?)
    }
}
