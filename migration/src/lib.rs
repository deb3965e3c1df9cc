pub use sea_orm_migration::prelude::*;

mod m20261018_000001_create_directory_tables;
mod m20261018_000002_create_internship_tables;
mod m20261018_000003_create_users_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261018_000001_create_directory_tables::Migration),
            Box::new(m20261018_000002_create_internship_tables::Migration),
            Box::new(m20261018_000003_create_users_table::Migration),
        ]
    }
}

/// Creates single-column indexes given as `(index, table, column)` triples.
pub(crate) async fn create_indexes(
    manager: &SchemaManager<'_>,
    indexes: &[(&str, &str, &str)],
) -> Result<(), DbErr> {
    for (index_name, table_name, column_name) in indexes {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(*index_name)
                    .table(Alias::new(*table_name))
                    .col(Alias::new(*column_name))
                    .to_owned(),
            )
            .await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm_migration::sea_orm::{
        ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, ExecResult, Statement,
    };

    const TABLES: [&str; 7] = [
        "students",
        "employers",
        "internships",
        "applications",
        "reports",
        "reviews",
        "users",
    ];

    #[tokio::test]
    async fn up_creates_every_table_and_down_drops_them() {
        let db = Database::connect("sqlite::memory:").await.unwrap();

        Migrator::up(&db, None).await.unwrap();
        let manager = SchemaManager::new(&db);
        for table in TABLES {
            assert!(manager.has_table(table).await.unwrap(), "missing {table}");
        }
        assert!(manager.has_index("internships", "idx_internships_employer_id").await.unwrap());

        Migrator::down(&db, None).await.unwrap();
        for table in TABLES {
            assert!(!manager.has_table(table).await.unwrap(), "{table} not dropped");
        }
    }

    async fn exec(db: &DatabaseConnection, sql: &str) -> Result<ExecResult, DbErr> {
        db.execute(Statement::from_string(DatabaseBackend::Sqlite, sql))
            .await
    }

    /// Migrated database holding employer 1, student 1 and internship 1.
    async fn seeded() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        exec(
            &db,
            r#"INSERT INTO "employers" ("company_name", "contact_person", "email", "phone", "industry", "location")
               VALUES ('Acme', 'Jane', 'hr@acme.test', '123', 'IT', 'Kazan')"#,
        )
        .await
        .unwrap();
        exec(
            &db,
            r#"INSERT INTO "students" ("first_name", "last_name", "email", "phone", "university", "faculty", "specialty")
               VALUES ('Anna', 'Ivanova', 'anna@uni.test', '123', 'KFU', 'CS', 'SE')"#,
        )
        .await
        .unwrap();
        exec(
            &db,
            r#"INSERT INTO "internships" ("employer_id", "position", "start_date", "end_date", "description", "status")
               VALUES (1, 'Intern', '2024-06-01', '2024-08-31', 'Summer', 'active')"#,
        )
        .await
        .unwrap();
        db
    }

    #[tokio::test]
    async fn check_constraints_reject_unknown_status() {
        let db = seeded().await;

        let result = exec(
            &db,
            r#"INSERT INTO "internships" ("employer_id", "position", "start_date", "end_date", "description", "status")
               VALUES (1, 'Intern', '2024-06-01', '2024-08-31', 'Summer', 'archived')"#,
        )
        .await;
        assert!(result.is_err());

        let result = exec(
            &db,
            r#"INSERT INTO "applications" ("student_id", "internship_id", "application_date", "status")
               VALUES (1, 1, '2024-05-01', 'maybe')"#,
        )
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn check_constraint_rejects_inverted_internship_dates() {
        let db = seeded().await;

        let result = exec(
            &db,
            r#"INSERT INTO "internships" ("employer_id", "position", "start_date", "end_date", "description", "status")
               VALUES (1, 'Intern', '2024-09-01', '2024-06-01', 'Backwards', 'active')"#,
        )
        .await;
        assert!(result.is_err());

        let result = exec(
            &db,
            r#"UPDATE "internships" SET "end_date" = '2024-01-01' WHERE "id" = 1"#,
        )
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn check_constraints_keep_ratings_between_one_and_five() {
        let db = seeded().await;

        for rating in [0, 6] {
            let report = format!(
                r#"INSERT INTO "reports" ("internship_id", "student_id", "employer_id", "submission_date", "content", "rating")
                   VALUES (1, 1, 1, '2024-09-01', 'Done', {rating})"#
            );
            assert!(exec(&db, &report).await.is_err(), "report rating {rating}");

            let review = format!(
                r#"INSERT INTO "reviews" ("internship_id", "student_id", "employer_id", "rating", "feedback")
                   VALUES (1, 1, 1, {rating}, 'Fine')"#
            );
            assert!(exec(&db, &review).await.is_err(), "review rating {rating}");
        }

        exec(
            &db,
            r#"INSERT INTO "reviews" ("internship_id", "student_id", "employer_id", "rating", "feedback")
               VALUES (1, 1, 1, 5, 'Great')"#,
        )
        .await
        .unwrap();
    }
}
