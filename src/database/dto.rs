//! Data transfer objects
//!
//! Input records for creating and partially updating rows. Choice fields
//! are typed, so a value outside a vocabulary is rejected while the input
//! is deserialized, before any validation or persistence happens.
//! `validate` performs the remaining boundary checks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::validation::{
    require_content, require_date_order, require_email, require_text, MAX_PHONE_LEN, MAX_TEXT_LEN,
};
use crate::entity::choices::{ApplicationStatus, InternshipStatus, Rating, UserRole};
use crate::error::Result;

/// Runs `check` on a value only when the caller supplied it.
fn check_some<T: ?Sized>(value: Option<&T>, check: impl FnOnce(&T) -> Result<()>) -> Result<()> {
    value.map_or(Ok(()), check)
}

// ==================== Students ====================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub university: String,
    pub faculty: String,
    pub specialty: String,
}

impl NewStudent {
    pub fn validate(&self) -> Result<()> {
        require_text("first_name", &self.first_name, MAX_TEXT_LEN)?;
        require_text("last_name", &self.last_name, MAX_TEXT_LEN)?;
        require_email("email", &self.email)?;
        require_text("phone", &self.phone, MAX_PHONE_LEN)?;
        require_text("university", &self.university, MAX_TEXT_LEN)?;
        require_text("faculty", &self.faculty, MAX_TEXT_LEN)?;
        require_text("specialty", &self.specialty, MAX_TEXT_LEN)
    }
}

/// Partial update; `None` leaves the column unchanged.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdateStudent {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub university: Option<String>,
    pub faculty: Option<String>,
    pub specialty: Option<String>,
}

impl UpdateStudent {
    pub fn validate(&self) -> Result<()> {
        check_some(self.first_name.as_deref(), |v| require_text("first_name", v, MAX_TEXT_LEN))?;
        check_some(self.last_name.as_deref(), |v| require_text("last_name", v, MAX_TEXT_LEN))?;
        check_some(self.email.as_deref(), |v| require_email("email", v))?;
        check_some(self.phone.as_deref(), |v| require_text("phone", v, MAX_PHONE_LEN))?;
        check_some(self.university.as_deref(), |v| require_text("university", v, MAX_TEXT_LEN))?;
        check_some(self.faculty.as_deref(), |v| require_text("faculty", v, MAX_TEXT_LEN))?;
        check_some(self.specialty.as_deref(), |v| require_text("specialty", v, MAX_TEXT_LEN))
    }
}

// ==================== Employers ====================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewEmployer {
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub industry: String,
    pub location: String,
}

impl NewEmployer {
    pub fn validate(&self) -> Result<()> {
        require_text("company_name", &self.company_name, MAX_TEXT_LEN)?;
        require_text("contact_person", &self.contact_person, MAX_TEXT_LEN)?;
        require_email("email", &self.email)?;
        require_text("phone", &self.phone, MAX_PHONE_LEN)?;
        require_text("industry", &self.industry, MAX_TEXT_LEN)?;
        require_text("location", &self.location, MAX_TEXT_LEN)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdateEmployer {
    pub company_name: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
}

impl UpdateEmployer {
    pub fn validate(&self) -> Result<()> {
        check_some(self.company_name.as_deref(), |v| {
            require_text("company_name", v, MAX_TEXT_LEN)
        })?;
        check_some(self.contact_person.as_deref(), |v| {
            require_text("contact_person", v, MAX_TEXT_LEN)
        })?;
        check_some(self.email.as_deref(), |v| require_email("email", v))?;
        check_some(self.phone.as_deref(), |v| require_text("phone", v, MAX_PHONE_LEN))?;
        check_some(self.industry.as_deref(), |v| require_text("industry", v, MAX_TEXT_LEN))?;
        check_some(self.location.as_deref(), |v| require_text("location", v, MAX_TEXT_LEN))
    }
}

// ==================== Internships ====================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewInternship {
    pub employer_id: i32,
    pub position: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
    /// Defaults to `active`.
    #[serde(default)]
    pub status: InternshipStatus,
}

impl NewInternship {
    pub fn validate(&self) -> Result<()> {
        require_text("position", &self.position, MAX_TEXT_LEN)?;
        require_content("description", &self.description)?;
        require_date_order(self.start_date, self.end_date)
    }
}

/// Date order is checked against the merged row by the repository.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdateInternship {
    pub employer_id: Option<i32>,
    pub position: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub status: Option<InternshipStatus>,
}

impl UpdateInternship {
    pub fn validate(&self) -> Result<()> {
        check_some(self.position.as_deref(), |v| require_text("position", v, MAX_TEXT_LEN))?;
        check_some(self.description.as_deref(), |v| require_content("description", v))
    }
}

// ==================== Applications ====================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewApplication {
    pub student_id: i32,
    pub internship_id: i32,
    pub application_date: NaiveDate,
    /// Defaults to `pending`.
    #[serde(default)]
    pub status: ApplicationStatus,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdateApplication {
    pub student_id: Option<i32>,
    pub internship_id: Option<i32>,
    pub application_date: Option<NaiveDate>,
    pub status: Option<ApplicationStatus>,
}

// ==================== Reports ====================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewReport {
    pub internship_id: i32,
    pub student_id: i32,
    pub employer_id: i32,
    pub submission_date: NaiveDate,
    pub content: String,
    pub rating: Rating,
}

impl NewReport {
    pub fn validate(&self) -> Result<()> {
        require_content("content", &self.content)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdateReport {
    pub internship_id: Option<i32>,
    pub student_id: Option<i32>,
    pub employer_id: Option<i32>,
    pub submission_date: Option<NaiveDate>,
    pub content: Option<String>,
    pub rating: Option<Rating>,
}

impl UpdateReport {
    pub fn validate(&self) -> Result<()> {
        check_some(self.content.as_deref(), |v| require_content("content", v))
    }
}

// ==================== Reviews ====================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewReview {
    pub internship_id: i32,
    pub student_id: i32,
    pub employer_id: i32,
    pub rating: Rating,
    pub feedback: String,
}

impl NewReview {
    pub fn validate(&self) -> Result<()> {
        require_content("feedback", &self.feedback)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdateReview {
    pub internship_id: Option<i32>,
    pub student_id: Option<i32>,
    pub employer_id: Option<i32>,
    pub rating: Option<Rating>,
    pub feedback: Option<String>,
}

impl UpdateReview {
    pub fn validate(&self) -> Result<()> {
        check_some(self.feedback.as_deref(), |v| require_content("feedback", v))
    }
}

// ==================== Users ====================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    /// Stored as given; hashing belongs to the authentication layer.
    pub password_hash: String,
    pub role: UserRole,
    pub email: String,
}

impl NewUser {
    pub fn validate(&self) -> Result<()> {
        validate_account(&self.username, &self.password_hash, &self.email)
    }
}

/// Checks shared by every write of a complete user record.
pub(crate) fn validate_account(username: &str, password_hash: &str, email: &str) -> Result<()> {
    require_text("username", username, MAX_TEXT_LEN)?;
    require_text("password_hash", password_hash, MAX_TEXT_LEN)?;
    require_email("email", email)
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<UserRole>,
    pub email: Option<String>,
}

impl UpdateUser {
    pub fn validate(&self) -> Result<()> {
        check_some(self.username.as_deref(), |v| require_text("username", v, MAX_TEXT_LEN))?;
        check_some(self.password_hash.as_deref(), |v| {
            require_text("password_hash", v, MAX_TEXT_LEN)
        })?;
        check_some(self.email.as_deref(), |v| require_email("email", v))
    }
}
