#![allow(dead_code)]

use chrono::NaiveDate;
use intern_learning::database::dto::{
    NewApplication, NewEmployer, NewInternship, NewReport, NewReview, NewStudent, NewUser,
};
use intern_learning::entity::choices::{ApplicationStatus, InternshipStatus, Rating, UserRole};
use intern_learning::entity::{application, employer, internship, report, review, student};
use intern_learning::{
    ApplicationsRepository, DatabaseConfig, EmployersRepository, InternshipsRepository,
    ReportsRepository, ReviewsRepository, StudentsRepository,
};
use sea_orm::DatabaseConnection;

/// Fresh, fully migrated in-memory database.
pub async fn setup() -> DatabaseConnection {
    intern_learning::open(&DatabaseConfig::in_memory())
        .await
        .expect("open in-memory database")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn new_student(first_name: &str, last_name: &str, email: &str) -> NewStudent {
    NewStudent {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        phone: "+7 900 000 00 00".to_string(),
        university: "Kazan Federal University".to_string(),
        faculty: "Computer Science".to_string(),
        specialty: "Software Engineering".to_string(),
    }
}

pub fn new_employer(company_name: &str, email: &str) -> NewEmployer {
    NewEmployer {
        company_name: company_name.to_string(),
        contact_person: "Maria Petrova".to_string(),
        email: email.to_string(),
        phone: "+7 843 000 00 00".to_string(),
        industry: "IT".to_string(),
        location: "Kazan".to_string(),
    }
}

pub fn new_internship(employer_id: i32, start: NaiveDate, end: NaiveDate) -> NewInternship {
    NewInternship {
        employer_id,
        position: "Backend intern".to_string(),
        start_date: start,
        end_date: end,
        description: "Summer programme".to_string(),
        status: InternshipStatus::default(),
    }
}

pub fn new_user(username: &str, email: &str, role: UserRole) -> NewUser {
    NewUser {
        username: username.to_string(),
        password_hash: "pbkdf2_sha256$600000$salt$hash".to_string(),
        role,
        email: email.to_string(),
    }
}

pub async fn create_student(db: &DatabaseConnection, last_name: &str, email: &str) -> student::Model {
    StudentsRepository::create(db, new_student("Anna", last_name, email))
        .await
        .expect("create student")
}

pub async fn create_employer(
    db: &DatabaseConnection,
    company_name: &str,
    email: &str,
) -> employer::Model {
    EmployersRepository::create(db, new_employer(company_name, email))
        .await
        .expect("create employer")
}

pub async fn create_internship(
    db: &DatabaseConnection,
    employer_id: i32,
    start: NaiveDate,
    end: NaiveDate,
) -> internship::Model {
    InternshipsRepository::create(db, new_internship(employer_id, start, end))
        .await
        .expect("create internship")
}

pub async fn create_application(
    db: &DatabaseConnection,
    student_id: i32,
    internship_id: i32,
    application_date: NaiveDate,
) -> application::Model {
    ApplicationsRepository::create(
        db,
        NewApplication {
            student_id,
            internship_id,
            application_date,
            status: ApplicationStatus::default(),
        },
    )
    .await
    .expect("create application")
}

pub async fn create_report(
    db: &DatabaseConnection,
    internship: &internship::Model,
    student_id: i32,
    submission_date: NaiveDate,
    rating: Rating,
) -> report::Model {
    ReportsRepository::create(
        db,
        NewReport {
            internship_id: internship.id,
            student_id,
            employer_id: internship.employer_id,
            submission_date,
            content: "Built the reporting pipeline".to_string(),
            rating,
        },
    )
    .await
    .expect("create report")
}

pub async fn create_review(
    db: &DatabaseConnection,
    internship: &internship::Model,
    student_id: i32,
    rating: Rating,
) -> review::Model {
    ReviewsRepository::create(
        db,
        NewReview {
            internship_id: internship.id,
            student_id,
            employer_id: internship.employer_id,
            rating,
            feedback: "Helpful mentors".to_string(),
        },
    )
    .await
    .expect("create review")
}
