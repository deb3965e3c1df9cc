use crate::database::dto::{NewEmployer, UpdateEmployer};
use crate::entity::employer;
use crate::entity::prelude::*;
use crate::error::{Result, SchemaError};
use sea_orm::*;

const ENTITY: &str = "employer";

/// Employer repository
pub struct EmployersRepository;

impl EmployersRepository {
    // ==================== CRUD ====================

    pub async fn create(db: &DatabaseConnection, employer: NewEmployer) -> Result<employer::Model> {
        employer.validate()?;

        let employer_active = employer::ActiveModel {
            id: NotSet,
            company_name: Set(employer.company_name),
            contact_person: Set(employer.contact_person),
            email: Set(employer.email),
            phone: Set(employer.phone),
            industry: Set(employer.industry),
            location: Set(employer.location),
        };

        employer_active
            .insert(db)
            .await
            .map_err(|e| SchemaError::from_db(ENTITY, e))
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<employer::Model>> {
        Ok(Employers::find_by_id(id).one(db).await?)
    }

    /// All employers by company name.
    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<employer::Model>> {
        Ok(Employers::find_ordered()
            .order_by_asc(employer::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn find_by_email(
        db: &DatabaseConnection,
        email: &str,
    ) -> Result<Option<employer::Model>> {
        Ok(Employers::find()
            .filter(employer::Column::Email.eq(email))
            .one(db)
            .await?)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        updates: UpdateEmployer,
    ) -> Result<employer::Model> {
        updates.validate()?;

        let existing = Employers::find_by_id(id)
            .one(db)
            .await?
            .ok_or(SchemaError::NotFound { entity: ENTITY, id })?;

        let mut active: employer::ActiveModel = existing.clone().into();

        if let Some(company_name) = updates.company_name {
            active.company_name = Set(company_name);
        }
        if let Some(contact_person) = updates.contact_person {
            active.contact_person = Set(contact_person);
        }
        if let Some(email) = updates.email {
            active.email = Set(email);
        }
        if let Some(phone) = updates.phone {
            active.phone = Set(phone);
        }
        if let Some(industry) = updates.industry {
            active.industry = Set(industry);
        }
        if let Some(location) = updates.location {
            active.location = Set(location);
        }

        if !active.is_changed() {
            return Ok(existing);
        }

        active
            .update(db)
            .await
            .map_err(|e| SchemaError::from_db(ENTITY, e))
    }

    /// Delete an employer. Its internships cascade, and with them every
    /// application, report and review tied to those internships.
    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<u64> {
        let result = Employers::delete_by_id(id).exec(db).await?;
        if result.rows_affected > 0 {
            log::info!("Deleted employer {}", id);
        }
        Ok(result.rows_affected)
    }

    pub async fn count(db: &DatabaseConnection) -> Result<u64> {
        Ok(Employers::find().count(db).await?)
    }
}
