use crate::database::dto::{NewReview, UpdateReview};
use crate::entity::prelude::*;
use crate::entity::{review, student};
use crate::error::{Result, SchemaError};
use sea_orm::*;

const ENTITY: &str = "review";

/// Review repository
pub struct ReviewsRepository;

impl ReviewsRepository {
    // ==================== CRUD ====================

    /// Insert a review. Internship, student and employer must all exist.
    pub async fn create(db: &DatabaseConnection, review: NewReview) -> Result<review::Model> {
        review.validate()?;

        let review_active = review::ActiveModel {
            id: NotSet,
            internship_id: Set(review.internship_id),
            student_id: Set(review.student_id),
            employer_id: Set(review.employer_id),
            rating: Set(review.rating),
            feedback: Set(review.feedback),
        };

        review_active
            .insert(db)
            .await
            .map_err(|e| SchemaError::from_db(ENTITY, e))
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<review::Model>> {
        Ok(Reviews::find_by_id(id).one(db).await?)
    }

    /// All reviews, lowest rating first.
    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<review::Model>> {
        Ok(Reviews::find_ordered()
            .order_by_asc(review::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn find_by_internship(
        db: &DatabaseConnection,
        internship_id: i32,
    ) -> Result<Vec<review::Model>> {
        Self::find_filtered(db, review::Column::InternshipId.eq(internship_id)).await
    }

    pub async fn find_by_student(
        db: &DatabaseConnection,
        student_id: i32,
    ) -> Result<Vec<review::Model>> {
        Self::find_filtered(db, review::Column::StudentId.eq(student_id)).await
    }

    pub async fn find_by_employer(
        db: &DatabaseConnection,
        employer_id: i32,
    ) -> Result<Vec<review::Model>> {
        Self::find_filtered(db, review::Column::EmployerId.eq(employer_id)).await
    }

    pub async fn find_with_student(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<(review::Model, Option<student::Model>)>> {
        Ok(Reviews::find_by_id(id)
            .find_also_related(Students)
            .one(db)
            .await?)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        updates: UpdateReview,
    ) -> Result<review::Model> {
        updates.validate()?;

        let existing = Reviews::find_by_id(id)
            .one(db)
            .await?
            .ok_or(SchemaError::NotFound { entity: ENTITY, id })?;

        let mut active: review::ActiveModel = existing.clone().into();

        if let Some(internship_id) = updates.internship_id {
            active.internship_id = Set(internship_id);
        }
        if let Some(student_id) = updates.student_id {
            active.student_id = Set(student_id);
        }
        if let Some(employer_id) = updates.employer_id {
            active.employer_id = Set(employer_id);
        }
        if let Some(rating) = updates.rating {
            active.rating = Set(rating);
        }
        if let Some(feedback) = updates.feedback {
            active.feedback = Set(feedback);
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
        let result = Reviews::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected)
    }

    pub async fn count(db: &DatabaseConnection) -> Result<u64> {
        Ok(Reviews::find().count(db).await?)
    }

    // ==================== Private ====================

    async fn find_filtered(
        db: &DatabaseConnection,
        condition: sea_query::SimpleExpr,
    ) -> Result<Vec<review::Model>> {
        Ok(Reviews::find_ordered()
            .filter(condition)
            .order_by_asc(review::Column::Id)
            .all(db)
            .await?)
    }
}
