//! Mock repositories for unit tests of the integrity components and services.

use crate::modules::course::domain::repository::MockCourseRepository;
use crate::modules::course::{Course, CourseRepository};
use crate::modules::department::domain::repository::MockDepartmentRepository;
use crate::modules::department::{Department, DepartmentRepository};
use crate::modules::enrollment::domain::repository::MockEnrollmentRepository;
use crate::modules::enrollment::EnrollmentRepository;
use crate::modules::faculty::domain::repository::MockFacultyRepository;
use crate::modules::faculty::{Faculty, FacultyRepository};
use crate::modules::instructor::domain::repository::MockInstructorRepository;
use crate::modules::instructor::{Instructor, InstructorRepository};
use crate::modules::level::domain::repository::MockLevelRepository;
use crate::modules::level::{Level, LevelRepository};
use crate::modules::student::domain::repository::MockStudentRepository;
use crate::modules::student::{Student, StudentRepository};
use crate::shared::domain::Person;
use crate::shared::infrastructure::AcademicRepositories;
use chrono::NaiveDate;

/// Unset expectations panic, so a test that sets none on a repository also
/// proves that repository was never touched.
#[derive(Default)]
pub(crate) struct MockRepositories {
    pub faculties: MockFacultyRepository,
    pub departments: MockDepartmentRepository,
    pub levels: MockLevelRepository,
    pub courses: MockCourseRepository,
    pub students: MockStudentRepository,
    pub instructors: MockInstructorRepository,
    pub enrollments: MockEnrollmentRepository,
}

impl AcademicRepositories for MockRepositories {
    fn faculties(&mut self) -> &mut dyn FacultyRepository {
        &mut self.faculties
    }

    fn departments(&mut self) -> &mut dyn DepartmentRepository {
        &mut self.departments
    }

    fn levels(&mut self) -> &mut dyn LevelRepository {
        &mut self.levels
    }

    fn courses(&mut self) -> &mut dyn CourseRepository {
        &mut self.courses
    }

    fn students(&mut self) -> &mut dyn StudentRepository {
        &mut self.students
    }

    fn instructors(&mut self) -> &mut dyn InstructorRepository {
        &mut self.instructors
    }

    fn enrollments(&mut self) -> &mut dyn EnrollmentRepository {
        &mut self.enrollments
    }
}

pub(crate) fn sample_faculty(id: i64, name: &str) -> Faculty {
    Faculty {
        id,
        name: name.to_string(),
    }
}

pub(crate) fn sample_department(id: i64, faculty_id: i64) -> Department {
    Department {
        id,
        name: format!("Department {}", id),
        faculty_id,
    }
}

pub(crate) fn sample_level(id: i64, faculty_id: i64) -> Level {
    Level {
        id,
        name: format!("Level {}", id),
        faculty_id,
    }
}

pub(crate) fn sample_course(code: &str) -> Course {
    Course {
        code: code.to_string(),
        name: "Algorithms".to_string(),
        credits: 3,
        level_id: 1,
        department_id: 1,
    }
}

pub(crate) fn sample_person() -> Person {
    Person {
        first_name: "Omar".to_string(),
        last_name: "Hassan".to_string(),
        phone_number: "01000000000".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(2002, 9, 14).unwrap(),
        gender: Some("male".to_string()),
    }
}

pub(crate) fn sample_student(id: i64) -> Student {
    Student {
        id,
        person: sample_person(),
        level_id: 1,
        department_id: Some(1),
        user_id: None,
    }
}

pub(crate) fn sample_instructor(id: i64) -> Instructor {
    Instructor {
        id,
        person: sample_person(),
        department_id: 1,
        user_id: None,
    }
}
