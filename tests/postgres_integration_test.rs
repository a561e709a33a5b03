/// The same rules against Postgres, one throwaway database per test
///
/// Needs TEST_DATABASE_URL pointing at a server where the user may create databases.
mod utils;

use tokio_test::assert_ok;
use university_lib::modules::{
    department::DepartmentInput, enrollment::GradeInput, faculty::FacultyInput,
    level::LevelInput,
};
use university_lib::shared::errors::ErrorCode;
use utils::factories::{enrollment, CourseFactory, InstructorFactory, StudentFactory};
use utils::helpers;
use utils::test_db::TestDb;

#[tokio::test]
#[ignore] // Run with --ignored once TEST_DATABASE_URL is provisioned
async fn end_to_end_structure_scenario() {
    let test_db = TestDb::new();
    let services = test_db.services();

    let faculty = services
        .faculties
        .create_faculty(FacultyInput::new("Engineering"))
        .await
        .unwrap();
    let department = services
        .departments
        .create_department(DepartmentInput::new("CS", Some(faculty.id)))
        .await
        .unwrap();
    let level = services
        .levels
        .create_level(LevelInput::new("L1", Some(faculty.id)))
        .await
        .unwrap();
    assert_ok!(
        services
            .courses
            .create_course(
                CourseFactory::new("CS101")
                    .in_structure(department.id, level.id)
                    .build()
            )
            .await
    );

    let err = services
        .faculties
        .delete_faculty(faculty.id)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::FacultyHasDepartments);

    assert_ok!(services.courses.delete_course("cs101").await);
    assert!(services.courses.list_courses().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore] // Run with --ignored once TEST_DATABASE_URL is provisioned
async fn case_insensitive_uniqueness_in_sql() {
    let test_db = TestDb::new();
    let services = test_db.services();
    let structure = helpers::seed_structure(&services).await;

    let err = services
        .faculties
        .create_faculty(FacultyInput::new("engineering"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::FacultyAlreadyExists);

    let err = services
        .levels
        .create_level(LevelInput::new("l1", Some(structure.faculty.id)))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::LevelAlreadyExists);

    services
        .courses
        .create_course(
            CourseFactory::new("CS101")
                .in_structure(structure.department.id, structure.level.id)
                .build(),
        )
        .await
        .unwrap();
    let err = services
        .courses
        .create_course(
            CourseFactory::new("cs101")
                .in_structure(structure.department.id, structure.level.id)
                .build(),
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::CourseAlreadyExists);
}

#[tokio::test]
#[ignore] // Run with --ignored once TEST_DATABASE_URL is provisioned
async fn teaching_and_enrollment_round_trip() {
    let test_db = TestDb::new();
    let services = test_db.services();
    let structure = helpers::seed_structure(&services).await;
    services
        .courses
        .create_course(
            CourseFactory::new("CS101")
                .in_structure(structure.department.id, structure.level.id)
                .build(),
        )
        .await
        .unwrap();

    let instructor = services
        .instructors
        .create_instructor(
            InstructorFactory::new("Ali")
                .department(structure.department.id)
                .teaching(&["cs101"])
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(instructor.course_codes, vec!["CS101"]);

    let student = services
        .students
        .create_student(StudentFactory::new("Mona").level(structure.level.id).build())
        .await
        .unwrap();
    services
        .enrollments
        .create_enrollment(enrollment(student.id, "CS101", Some(64.0)))
        .await
        .unwrap();
    let regraded = services
        .enrollments
        .update_enrollment(student.id, "CS101", GradeInput { grade: Some(71.5) })
        .await
        .unwrap();
    assert_eq!(regraded.grade, 71.5);

    let err = services.courses.delete_course("CS101").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::CourseHasEnrollments);

    assert_ok!(
        services
            .instructors
            .delete_instructor(instructor.instructor.id)
            .await
    );
    assert!(services
        .courses
        .get_course("CS101")
        .await
        .unwrap()
        .instructor_ids
        .is_empty());
}

#[tokio::test]
#[ignore] // Run with --ignored once TEST_DATABASE_URL is provisioned
async fn faculty_cascade_is_refused_while_levels_hold_students() {
    let test_db = TestDb::new();
    let services = test_db.services();
    let structure = helpers::seed_structure(&services).await;
    services
        .students
        .create_student(StudentFactory::new("Omar").level(structure.level.id).build())
        .await
        .unwrap();
    services
        .departments
        .delete_department(structure.department.id)
        .await
        .unwrap();

    let err = services
        .faculties
        .delete_faculty(structure.faculty.id)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::DataIntegrityViolation);
    assert_ok!(services.levels.get_level(structure.level.id).await);
}
