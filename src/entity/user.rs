//! User account entity
//!
//! Not linked to `student` or `employer` rows. `last_login` is rewritten on
//! every save, so it records the last modification rather than the last
//! authentication.

use std::fmt;

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};

use super::choices::UserRole;
use super::meta::EntityMeta;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(255))", unique)]
    pub username: String,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
    #[sea_orm(column_type = "String(StringLen::N(255))", unique)]
    pub email: String,
    pub last_login: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        self.last_login = Set(chrono::Utc::now());
        Ok(self)
    }
}

impl EntityMeta for Entity {
    const VERBOSE_NAME: &'static str = "Пользователь";
    const VERBOSE_NAME_PLURAL: &'static str = "Пользователи";

    fn default_ordering() -> Column {
        Column::Username
    }

    fn field_label(column: Column) -> &'static str {
        match column {
            Column::Id => "ID",
            Column::Username => "Имя пользователя",
            Column::PasswordHash => "Хэш пароля",
            Column::Role => "Роль",
            Column::Email => "Email",
            Column::LastLogin => "Дата последнего входа",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}
