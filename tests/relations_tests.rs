mod common;

use common::*;
use intern_learning::database::dto::UpdateReview;
use intern_learning::entity::choices::{InternshipStatus, Rating};
use intern_learning::entity::meta::EntityMeta;
use intern_learning::entity::prelude::*;
use intern_learning::entity::{application, internship, review, student};
use intern_learning::{
    ApplicationsRepository, ReportsRepository, ReviewsRepository,
};
use sea_orm::{EntityTrait, ModelTrait};

#[tokio::test]
async fn application_loads_with_its_student_for_display() {
    let db = setup().await;
    let student = create_student(&db, "Ivanova", "anna@uni.ru").await;
    let acme = create_employer(&db, "Acme", "hr@acme.io").await;
    let internship = create_internship(&db, acme.id, date(2024, 6, 1), date(2024, 8, 31)).await;
    let application = create_application(&db, student.id, internship.id, date(2024, 5, 1)).await;

    let (loaded, owner) = ApplicationsRepository::find_with_student(&db, application.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded, application);
    assert_eq!(owner.unwrap().to_string(), "Anna Ivanova");

    assert_eq!(acme.to_string(), "Acme");
    assert_eq!(internship.to_string(), "Backend intern (2024-06-01 - 2024-08-31)");

    assert!(
        ApplicationsRepository::find_with_student(&db, 404)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn reports_and_reviews_load_with_their_student() {
    let db = setup().await;
    let student = create_student(&db, "Ivanova", "anna@uni.ru").await;
    let acme = create_employer(&db, "Acme", "hr@acme.io").await;
    let internship = create_internship(&db, acme.id, date(2024, 6, 1), date(2024, 8, 31)).await;
    let report = create_report(&db, &internship, student.id, date(2024, 9, 1), Rating::Four).await;
    let review = create_review(&db, &internship, student.id, Rating::Five).await;

    let (_, report_student) = ReportsRepository::find_with_student(&db, report.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(report_student.unwrap().id, student.id);

    let (_, review_student) = ReviewsRepository::find_with_student(&db, review.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(review_student.unwrap().email, "anna@uni.ru");

    let by_internship = ReviewsRepository::find_by_internship(&db, internship.id)
        .await
        .unwrap();
    assert_eq!(by_internship, vec![review.clone()]);

    let lowered = ReviewsRepository::update(
        &db,
        review.id,
        UpdateReview {
            rating: Some(Rating::Two),
            ..UpdateReview::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(lowered.rating.value(), 2);
}

#[tokio::test]
async fn related_rows_are_reachable_through_entity_relations() {
    let db = setup().await;
    let student = create_student(&db, "Ivanova", "anna@uni.ru").await;
    let acme = create_employer(&db, "Acme", "hr@acme.io").await;
    let internship = create_internship(&db, acme.id, date(2024, 6, 1), date(2024, 8, 31)).await;
    create_application(&db, student.id, internship.id, date(2024, 5, 1)).await;

    let offered: Vec<internship::Model> = acme.find_related(Internships).all(&db).await.unwrap();
    assert_eq!(offered.len(), 1);
    assert_eq!(offered[0].status, InternshipStatus::Active);

    let applications: Vec<application::Model> =
        student.find_related(Applications).all(&db).await.unwrap();
    assert_eq!(applications.len(), 1);

    let employer = internship.find_related(Employers).one(&db).await.unwrap().unwrap();
    assert_eq!(employer.id, acme.id);

    let with_internships = Employers::find()
        .find_with_related(Internships)
        .all(&db)
        .await
        .unwrap();
    assert_eq!(with_internships.len(), 1);
    assert_eq!(with_internships[0].1.len(), 1);
}

#[test]
fn entities_carry_display_labels() {
    assert_eq!(Students::VERBOSE_NAME, "Студент");
    assert_eq!(Students::VERBOSE_NAME_PLURAL, "Студенты");
    assert_eq!(Students::field_label(student::Column::LastName), "Фамилия");
    assert_eq!(Internships::VERBOSE_NAME_PLURAL, "Стажировки");
    assert_eq!(Internships::field_label(internship::Column::EmployerId), "employer");
    assert_eq!(Reviews::field_label(review::Column::Id), "ID");
    assert_eq!(InternshipStatus::Completed.label(), "Завершена");
    assert_eq!(Rating::Three.label(), "3");
}
