//! Common re-exports.

// === SeaORM entities ===
pub use super::application::Entity as Applications;
pub use super::employer::Entity as Employers;
pub use super::internship::Entity as Internships;
pub use super::report::Entity as Reports;
pub use super::review::Entity as Reviews;
pub use super::student::Entity as Students;
pub use super::user::Entity as Users;

// === Vocabularies and metadata ===
pub use super::choices::{ApplicationStatus, InternshipStatus, Rating, UserRole};
pub use super::meta::EntityMeta;
