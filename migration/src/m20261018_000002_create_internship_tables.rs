//! Internships and everything hanging off them
//!
//! Creates four tables:
//! 1. internships, owned by an employer
//! 2. applications, a student applying to an internship
//! 3. reports, written about a student's internship with an employer rating
//! 4. reviews, rating plus free-text feedback
//!
//! Every foreign key cascades on delete. Status and rating columns are
//! restricted with CHECK constraints so rows written outside the ORM
//! still use the same vocabulary.

use sea_orm_migration::prelude::*;

use crate::create_indexes;

const INTERNSHIP_STATUSES: [&str; 3] = ["active", "completed", "cancelled"];
const APPLICATION_STATUSES: [&str; 3] = ["pending", "approved", "rejected"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. internships
        manager
            .create_table(
                Table::create()
                    .table(Internships::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Internships::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Internships::EmployerId).integer().not_null())
                    .col(ColumnDef::new(Internships::Position).string_len(255).not_null())
                    .col(ColumnDef::new(Internships::StartDate).date().not_null())
                    .col(ColumnDef::new(Internships::EndDate).date().not_null())
                    .col(ColumnDef::new(Internships::Description).text().not_null())
                    .col(
                        ColumnDef::new(Internships::Status)
                            .string_len(50)
                            .not_null()
                            .default("active")
                            .check(Expr::col(Internships::Status).is_in(INTERNSHIP_STATUSES)),
                    )
                    .check(Expr::col(Internships::StartDate).lte(Expr::col(Internships::EndDate)))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_internships_employer_id")
                            .from(Internships::Table, Internships::EmployerId)
                            .to(Employers::Table, Employers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // 2. applications
        manager
            .create_table(
                Table::create()
                    .table(Applications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Applications::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Applications::StudentId).integer().not_null())
                    .col(ColumnDef::new(Applications::InternshipId).integer().not_null())
                    .col(ColumnDef::new(Applications::ApplicationDate).date().not_null())
                    .col(
                        ColumnDef::new(Applications::Status)
                            .string_len(50)
                            .not_null()
                            .default("pending")
                            .check(Expr::col(Applications::Status).is_in(APPLICATION_STATUSES)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_applications_student_id")
                            .from(Applications::Table, Applications::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_applications_internship_id")
                            .from(Applications::Table, Applications::InternshipId)
                            .to(Internships::Table, Internships::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // 3. reports
        manager
            .create_table(
                Table::create()
                    .table(Reports::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reports::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reports::InternshipId).integer().not_null())
                    .col(ColumnDef::new(Reports::StudentId).integer().not_null())
                    .col(ColumnDef::new(Reports::EmployerId).integer().not_null())
                    .col(ColumnDef::new(Reports::SubmissionDate).date().not_null())
                    .col(ColumnDef::new(Reports::Content).text().not_null())
                    .col(
                        ColumnDef::new(Reports::Rating)
                            .integer()
                            .not_null()
                            .check(Expr::col(Reports::Rating).between(1, 5)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reports_internship_id")
                            .from(Reports::Table, Reports::InternshipId)
                            .to(Internships::Table, Internships::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reports_student_id")
                            .from(Reports::Table, Reports::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reports_employer_id")
                            .from(Reports::Table, Reports::EmployerId)
                            .to(Employers::Table, Employers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // 4. reviews
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reviews::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reviews::InternshipId).integer().not_null())
                    .col(ColumnDef::new(Reviews::StudentId).integer().not_null())
                    .col(ColumnDef::new(Reviews::EmployerId).integer().not_null())
                    .col(
                        ColumnDef::new(Reviews::Rating)
                            .integer()
                            .not_null()
                            .check(Expr::col(Reviews::Rating).between(1, 5)),
                    )
                    .col(ColumnDef::new(Reviews::Feedback).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_internship_id")
                            .from(Reviews::Table, Reviews::InternshipId)
                            .to(Internships::Table, Internships::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_student_id")
                            .from(Reviews::Table, Reviews::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_employer_id")
                            .from(Reviews::Table, Reviews::EmployerId)
                            .to(Employers::Table, Employers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        create_indexes(
            manager,
            &[
                // internships
                ("idx_internships_employer_id", "internships", "employer_id"),
                ("idx_internships_start_date", "internships", "start_date"),
                // applications
                ("idx_applications_student_id", "applications", "student_id"),
                (
                    "idx_applications_internship_id",
                    "applications",
                    "internship_id",
                ),
                (
                    "idx_applications_application_date",
                    "applications",
                    "application_date",
                ),
                // reports
                ("idx_reports_internship_id", "reports", "internship_id"),
                ("idx_reports_student_id", "reports", "student_id"),
                ("idx_reports_employer_id", "reports", "employer_id"),
                ("idx_reports_submission_date", "reports", "submission_date"),
                // reviews
                ("idx_reviews_internship_id", "reviews", "internship_id"),
                ("idx_reviews_student_id", "reviews", "student_id"),
                ("idx_reviews_employer_id", "reviews", "employer_id"),
                ("idx_reviews_rating", "reviews", "rating"),
            ],
        )
        .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Reports::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Applications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Internships::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Employers {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Internships {
    Table,
    Id,
    EmployerId,
    Position,
    StartDate,
    EndDate,
    Description,
    Status,
}

#[derive(DeriveIden)]
enum Applications {
    Table,
    Id,
    StudentId,
    InternshipId,
    ApplicationDate,
    Status,
}

#[derive(DeriveIden)]
enum Reports {
    Table,
    Id,
    InternshipId,
    StudentId,
    EmployerId,
    SubmissionDate,
    Content,
    Rating,
}

#[derive(DeriveIden)]
enum Reviews {
    Table,
    Id,
    InternshipId,
    StudentId,
    EmployerId,
    Rating,
    Feedback,
}
