mod common;

use common::*;
use intern_learning::{DatabaseConfig, EmployersRepository, StudentsRepository};

#[tokio::test]
async fn file_database_is_created_and_survives_reopening() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("data").join("intern_learning.db");
    let config = DatabaseConfig::with_path(&db_path);

    let db = intern_learning::open(&config).await.unwrap();
    assert!(db_path.exists());
    StudentsRepository::create(&db, new_student("Anna", "Ivanova", "anna@uni.ru"))
        .await
        .unwrap();
    intern_learning::close(db).await.unwrap();

    // Migrations are already applied; reopening must be a no-op for the schema.
    let db = intern_learning::open(&config).await.unwrap();
    let stored = StudentsRepository::find_by_email(&db, "anna@uni.ru")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.last_name, "Ivanova");
    assert_eq!(EmployersRepository::count(&db).await.unwrap(), 0);
    intern_learning::close(db).await.unwrap();
}

#[tokio::test]
async fn in_memory_databases_are_isolated() {
    let first = setup().await;
    let second = setup().await;

    create_student(&first, "Ivanova", "anna@uni.ru").await;

    assert_eq!(StudentsRepository::count(&first).await.unwrap(), 1);
    assert_eq!(StudentsRepository::count(&second).await.unwrap(), 0);
}

#[tokio::test]
async fn foreign_keys_are_enforced_on_file_databases() {
    let dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig::with_path(dir.path().join("fk.db"));
    let db = intern_learning::open(&config).await.unwrap();

    let err = intern_learning::InternshipsRepository::create(
        &db,
        new_internship(7, date(2024, 6, 1), date(2024, 8, 31)),
    )
    .await
    .unwrap_err();
    assert!(err.is_missing_parent(), "{err:?}");
}
