mod common;

use common::*;
use intern_learning::database::dto::{UpdateStudent, UpdateUser};
use intern_learning::entity::choices::UserRole;
use intern_learning::{EmployersRepository, SchemaError, StudentsRepository, UsersRepository};

#[tokio::test]
async fn duplicate_student_email_is_rejected() {
    let db = setup().await;
    create_student(&db, "Ivanova", "anna@uni.ru").await;

    let err = StudentsRepository::create(&db, new_student("Olga", "Sidorova", "anna@uni.ru"))
        .await
        .unwrap_err();

    assert!(
        matches!(err, SchemaError::Duplicate { entity: "student", .. }),
        "{err:?}"
    );
    assert_eq!(StudentsRepository::count(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn duplicate_employer_email_is_rejected() {
    let db = setup().await;
    create_employer(&db, "Acme", "hr@acme.io").await;

    let err = EmployersRepository::create(&db, new_employer("Globex", "hr@acme.io"))
        .await
        .unwrap_err();

    assert!(err.is_duplicate(), "{err:?}");
    assert_eq!(EmployersRepository::count(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn duplicate_username_or_user_email_is_rejected() {
    let db = setup().await;
    UsersRepository::create(&db, new_user("anna", "anna@uni.ru", UserRole::Student))
        .await
        .unwrap();

    let same_username =
        UsersRepository::create(&db, new_user("anna", "other@uni.ru", UserRole::Student)).await;
    assert!(same_username.unwrap_err().is_duplicate());

    let same_email =
        UsersRepository::create(&db, new_user("anna2", "anna@uni.ru", UserRole::Admin)).await;
    assert!(same_email.unwrap_err().is_duplicate());

    assert_eq!(UsersRepository::count(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn updating_into_a_taken_email_is_rejected() {
    let db = setup().await;
    create_student(&db, "Ivanova", "anna@uni.ru").await;
    let other = create_student(&db, "Petrova", "olga@uni.ru").await;

    let err = StudentsRepository::update(
        &db,
        other.id,
        UpdateStudent {
            email: Some("anna@uni.ru".to_string()),
            ..UpdateStudent::default()
        },
    )
    .await
    .unwrap_err();
    assert!(err.is_duplicate());

    let reloaded = StudentsRepository::find_by_id(&db, other.id).await.unwrap().unwrap();
    assert_eq!(reloaded.email, "olga@uni.ru");

    let user = UsersRepository::create(&db, new_user("olga", "olga@uni.ru", UserRole::Student))
        .await
        .unwrap();
    UsersRepository::create(&db, new_user("anna", "anna@uni.ru", UserRole::Student))
        .await
        .unwrap();
    let err = UsersRepository::update(
        &db,
        user.id,
        UpdateUser {
            username: Some("anna".to_string()),
            ..UpdateUser::default()
        },
    )
    .await
    .unwrap_err();
    assert!(err.is_duplicate());
}

#[tokio::test]
async fn uniqueness_is_scoped_to_each_table() {
    let db = setup().await;
    create_student(&db, "Ivanova", "shared@mail.ru").await;
    create_employer(&db, "Acme", "shared@mail.ru").await;
    UsersRepository::create(&db, new_user("shared", "shared@mail.ru", UserRole::Employer))
        .await
        .unwrap();

    let found = EmployersRepository::find_by_email(&db, "shared@mail.ru")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.company_name, "Acme");
}
