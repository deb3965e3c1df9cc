//! Choice-constrained column values
//!
//! Stored values are part of the on-disk format and must not change.
//! Each choice also carries the display label shown to end users.

use std::str::FromStr;

use sea_orm::entity::prelude::*;
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Internship lifecycle status. Transitions between states are not restricted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
#[serde(rename_all = "lowercase")]
pub enum InternshipStatus {
    #[default]
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

impl InternshipStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Активная",
            Self::Completed => "Завершена",
            Self::Cancelled => "Отменена",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

impl ApplicationStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Ожидает рассмотрения",
            Self::Approved => "Одобрена",
            Self::Rejected => "Отклонена",
        }
    }
}

/// Account role. There is no default: every user must be given one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[sea_orm(string_value = "student")]
    Student,
    #[sea_orm(string_value = "employer")]
    Employer,
    #[sea_orm(string_value = "admin")]
    Admin,
}

impl UserRole {
    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "Студент",
            Self::Employer => "Работодатель",
            Self::Admin => "Администратор",
        }
    }
}

/// Integer score from 1 to 5 used by reports and reviews.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(try_from = "i32", into = "i32")]
pub enum Rating {
    #[sea_orm(num_value = 1)]
    One,
    #[sea_orm(num_value = 2)]
    Two,
    #[sea_orm(num_value = 3)]
    Three,
    #[sea_orm(num_value = 4)]
    Four,
    #[sea_orm(num_value = 5)]
    Five,
}

impl Rating {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 5;

    pub fn value(self) -> i32 {
        self.to_value()
    }

    /// Ratings are labelled with their own number.
    pub fn label(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
        }
    }
}

impl TryFrom<i32> for Rating {
    type Error = SchemaError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_from_value(&value).map_err(|_| SchemaError::InvalidChoice {
            field: "rating",
            value: value.to_string(),
        })
    }
}

impl From<Rating> for i32 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

/// `FromStr` over the stored string value.
macro_rules! string_choice {
    ($ty:ty, $field:literal) => {
        impl FromStr for $ty {
            type Err = SchemaError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::try_from_value(&s.to_string()).map_err(|_| SchemaError::InvalidChoice {
                    field: $field,
                    value: s.to_string(),
                })
            }
        }
    };
}

string_choice!(InternshipStatus, "status");
string_choice!(ApplicationStatus, "status");
string_choice!(UserRole, "role");
