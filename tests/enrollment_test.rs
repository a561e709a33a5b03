/// Enrollment lifecycle keyed by the (student, course) pair
mod utils;

use tokio_test::assert_ok;
use university_lib::modules::enrollment::{EnrollmentId, GradeInput};
use university_lib::shared::errors::ErrorCode;
use university_lib::shared::infrastructure::MemoryUnitOfWork;
use university_lib::AcademicServices;
use utils::factories::{enrollment, CourseFactory, StudentFactory};
use utils::helpers;

/// Structure plus course CS101 and one student; returns the student id.
async fn enrollable(services: &AcademicServices<MemoryUnitOfWork>) -> i64 {
    let structure = helpers::seed_structure(services).await;
    services
        .courses
        .create_course(
            CourseFactory::new("CS101")
                .in_structure(structure.department.id, structure.level.id)
                .build(),
        )
        .await
        .unwrap();
    services
        .students
        .create_student(
            StudentFactory::new("Mona")
                .level(structure.level.id)
                .department(structure.department.id)
                .build(),
        )
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn second_enrollment_for_same_pair_is_conflict() {
    let services = helpers::build_test_services();
    let student_id = enrollable(&services).await;

    let created = assert_ok!(
        services
            .enrollments
            .create_enrollment(enrollment(student_id, "CS101", Some(88.0)))
            .await
    );
    assert_eq!(created.id(), EnrollmentId::new(student_id, "CS101"));

    let err = services
        .enrollments
        .create_enrollment(enrollment(student_id, "cs101", Some(91.0)))
        .await
        .unwrap_err();
    assert_eq!(err.status(), 409);
    assert_eq!(err.code(), ErrorCode::EnrollmentAlreadyExists);
}

#[tokio::test]
async fn updating_missing_pair_is_not_found() {
    let services = helpers::build_test_services();
    let student_id = enrollable(&services).await;

    let err = services
        .enrollments
        .update_enrollment(student_id, "CS101", GradeInput { grade: Some(70.0) })
        .await
        .unwrap_err();
    assert_eq!(err.status(), 404);
    assert_eq!(err.code(), ErrorCode::EnrollmentNotFound);
}

#[tokio::test]
async fn invalid_grades_never_reach_the_store() {
    let services = helpers::build_test_services();
    let student_id = enrollable(&services).await;
    let writes = services.unit_of_work().write_count();

    let err = services
        .enrollments
        .create_enrollment(enrollment(student_id, "CS101", Some(150.0)))
        .await
        .unwrap_err();
    assert_eq!(err.status(), 400);
    assert_eq!(err.code(), ErrorCode::InvalidGrade);

    let err = services
        .enrollments
        .create_enrollment(enrollment(student_id, "CS101", None))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::GradeNotSet);

    assert_eq!(services.unit_of_work().write_count(), writes);
    assert!(services
        .enrollments
        .list_enrollments()
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn regrade_and_delete() {
    let services = helpers::build_test_services();
    let student_id = enrollable(&services).await;
    services
        .enrollments
        .create_enrollment(enrollment(student_id, "CS101", Some(60.0)))
        .await
        .unwrap();

    let err = services
        .enrollments
        .update_enrollment(student_id, "CS101", GradeInput { grade: Some(100.5) })
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidGrade);

    let regraded = services
        .enrollments
        .update_enrollment(student_id, "cs101", GradeInput { grade: Some(100.0) })
        .await
        .unwrap();
    assert_eq!(regraded.grade, 100.0);
    assert_eq!(
        services
            .enrollments
            .get_enrollment(student_id, "CS101")
            .await
            .unwrap()
            .grade,
        100.0
    );

    assert_ok!(
        services
            .enrollments
            .delete_enrollment(student_id, "CS101")
            .await
    );
    let err = services
        .enrollments
        .delete_enrollment(student_id, "CS101")
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::EnrollmentNotFound);
}

#[tokio::test]
async fn enrollments_block_course_and_student_deletes() {
    let services = helpers::build_test_services();
    let student_id = enrollable(&services).await;
    services
        .enrollments
        .create_enrollment(enrollment(student_id, "CS101", Some(75.0)))
        .await
        .unwrap();

    let err = services.courses.delete_course("CS101").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::CourseHasEnrollments);

    let err = services
        .students
        .delete_student(student_id)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::StudentHasEnrollments);

    services
        .enrollments
        .delete_enrollment(student_id, "CS101")
        .await
        .unwrap();
    assert_ok!(services.students.delete_student(student_id).await);
    assert_ok!(services.courses.delete_course("CS101").await);
}

#[tokio::test]
async fn listings_by_parent() {
    let services = helpers::build_test_services();
    let student_id = enrollable(&services).await;

    assert!(services
        .enrollments
        .list_by_student(student_id)
        .await
        .unwrap()
        .is_empty());

    services
        .enrollments
        .create_enrollment(enrollment(student_id, "cs101", Some(82.5)))
        .await
        .unwrap();

    let by_course = services.enrollments.list_by_course("CS101").await.unwrap();
    assert_eq!(by_course.len(), 1);
    assert_eq!(by_course[0].course_code, "CS101");

    let err = services.enrollments.list_by_student(404).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::StudentNotFound);

    let err = services.enrollments.list_by_course("NOPE").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::CourseNotFound);
}

#[tokio::test]
async fn enrollment_requires_both_sides() {
    let services = helpers::build_test_services();
    let student_id = enrollable(&services).await;

    let err = services
        .enrollments
        .create_enrollment(enrollment(student_id, "MATH1", Some(50.0)))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::CourseNotFound);

    let err = services
        .enrollments
        .create_enrollment(enrollment(999, "CS101", Some(50.0)))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::StudentNotFound);
}

#[tokio::test]
async fn pair_operations_report_unknown_student_first() {
    let services = helpers::build_test_services();
    enrollable(&services).await;

    let get = services
        .enrollments
        .get_enrollment(999, "CS101")
        .await
        .unwrap_err();
    assert_eq!(get.code(), ErrorCode::StudentNotFound);

    let delete = services
        .enrollments
        .delete_enrollment(999, "CS101")
        .await
        .unwrap_err();
    assert_eq!(delete.code(), ErrorCode::StudentNotFound);

    let update = services
        .enrollments
        .update_enrollment(999, "CS101", GradeInput { grade: Some(70.0) })
        .await
        .unwrap_err();
    assert_eq!(update.code(), ErrorCode::StudentNotFound);

    // An unknown student wins over an unknown course too.
    let get = services
        .enrollments
        .get_enrollment(999, "MATH1")
        .await
        .unwrap_err();
    assert_eq!(get.code(), ErrorCode::StudentNotFound);
}
