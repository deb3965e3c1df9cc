//! User account repository
//!
//! Every write goes through `ActiveModelBehavior::before_save`, which stamps
//! `last_login` with the current time.

use crate::database::dto::{validate_account, NewUser, UpdateUser};
use crate::entity::prelude::*;
use crate::entity::user;
use crate::error::{Result, SchemaError};
use sea_orm::*;

const ENTITY: &str = "user";

pub struct UsersRepository;

impl UsersRepository {
    // ==================== CRUD ====================

    /// Insert a user. Username and email must both be unused.
    pub async fn create(db: &DatabaseConnection, user: NewUser) -> Result<user::Model> {
        user.validate()?;

        let user_active = user::ActiveModel {
            id: NotSet,
            username: Set(user.username),
            password_hash: Set(user.password_hash),
            role: Set(user.role),
            email: Set(user.email),
            last_login: NotSet,
        };

        user_active
            .insert(db)
            .await
            .map_err(|e| SchemaError::from_db(ENTITY, e))
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<user::Model>> {
        Ok(Users::find_by_id(id).one(db).await?)
    }

    /// All users by username.
    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<user::Model>> {
        Ok(Users::find_ordered()
            .order_by_asc(user::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn find_by_username(
        db: &DatabaseConnection,
        username: &str,
    ) -> Result<Option<user::Model>> {
        Ok(Users::find()
            .filter(user::Column::Username.eq(username))
            .one(db)
            .await?)
    }

    pub async fn find_by_role(db: &DatabaseConnection, role: UserRole) -> Result<Vec<user::Model>> {
        Ok(Users::find_ordered()
            .filter(user::Column::Role.eq(role))
            .order_by_asc(user::Column::Id)
            .all(db)
            .await?)
    }

    /// Partial update. Always writes, so `last_login` moves forward even when
    /// no field is supplied.
    pub async fn update(db: &DatabaseConnection, id: i32, updates: UpdateUser) -> Result<user::Model> {
        updates.validate()?;

        let existing = Users::find_by_id(id)
            .one(db)
            .await?
            .ok_or(SchemaError::NotFound { entity: ENTITY, id })?;

        let mut active: user::ActiveModel = existing.into();

        if let Some(username) = updates.username {
            active.username = Set(username);
        }
        if let Some(password_hash) = updates.password_hash {
            active.password_hash = Set(password_hash);
        }
        if let Some(role) = updates.role {
            active.role = Set(role);
        }
        if let Some(email) = updates.email {
            active.email = Set(email);
        }

        active
            .update(db)
            .await
            .map_err(|e| SchemaError::from_db(ENTITY, e))
    }

    /// Write back a full user record as loaded or edited by the caller.
    pub async fn save(db: &DatabaseConnection, user: user::Model) -> Result<user::Model> {
        validate_account(&user.username, &user.password_hash, &user.email)?;

        let id = user.id;
        let active = user::ActiveModel::from(user).reset_all();

        match active.update(db).await {
            Ok(model) => Ok(model),
            Err(DbErr::RecordNotUpdated) => Err(SchemaError::NotFound { entity: ENTITY, id }),
            Err(e) => Err(SchemaError::from_db(ENTITY, e)),
        }
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<u64> {
        let result = Users::delete_by_id(id).exec(db).await?;
        if result.rows_affected > 0 {
            log::info!("Deleted user {}", id);
        }
        Ok(result.rows_affected)
    }

    pub async fn count(db: &DatabaseConnection) -> Result<u64> {
        Ok(Users::find().count(db).await?)
    }
}
