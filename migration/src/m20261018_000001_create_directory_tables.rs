//! Baseline migration: students and employers
//!
//! Both tables are parents of everything else and carry a unique email.

use sea_orm_migration::prelude::*;

use crate::create_indexes;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::FirstName).string_len(255).not_null())
                    .col(ColumnDef::new(Students::LastName).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Students::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::Phone).string_len(20).not_null())
                    .col(ColumnDef::new(Students::University).string_len(255).not_null())
                    .col(ColumnDef::new(Students::Faculty).string_len(255).not_null())
                    .col(ColumnDef::new(Students::Specialty).string_len(255).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Employers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employers::CompanyName).string_len(255).not_null())
                    .col(ColumnDef::new(Employers::ContactPerson).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Employers::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Employers::Phone).string_len(20).not_null())
                    .col(ColumnDef::new(Employers::Industry).string_len(255).not_null())
                    .col(ColumnDef::new(Employers::Location).string_len(255).not_null())
                    .to_owned(),
            )
            .await?;

        create_indexes(
            manager,
            &[
                ("idx_students_last_name", "students", "last_name"),
                ("idx_employers_company_name", "employers", "company_name"),
            ],
        )
        .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    University,
    Faculty,
    Specialty,
}

#[derive(DeriveIden)]
enum Employers {
    Table,
    Id,
    CompanyName,
    ContactPerson,
    Email,
    Phone,
    Industry,
    Location,
}
