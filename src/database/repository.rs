//! Repositories
//!
//! One stateless repository per entity. Every function takes the connection
//! as its first argument and maps store errors into `SchemaError`.

pub mod applications_repository;
pub mod employers_repository;
pub mod internships_repository;
pub mod reports_repository;
pub mod reviews_repository;
pub mod students_repository;
pub mod users_repository;

pub use applications_repository::ApplicationsRepository;
pub use employers_repository::EmployersRepository;
pub use internships_repository::InternshipsRepository;
pub use reports_repository::ReportsRepository;
pub use reviews_repository::ReviewsRepository;
pub use students_repository::StudentsRepository;
pub use users_repository::UsersRepository;
