//! Entity definitions
//!
//! One SeaORM entity per table, the choice vocabularies used by their
//! status/role/rating columns, and the display metadata shared by all of them.

pub mod prelude;

// === Vocabularies and metadata ===
pub mod choices;
pub mod meta;

// === SeaORM entities (one per table) ===
pub mod application;
pub mod employer;
pub mod internship;
pub mod report;
pub mod review;
pub mod student;
pub mod user;
