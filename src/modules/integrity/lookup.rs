use crate::modules::course::Course;
use crate::modules::department::Department;
use crate::modules::enrollment::{Enrollment, EnrollmentId};
use crate::modules::faculty::Faculty;
use crate::modules::instructor::Instructor;
use crate::modules::level::Level;
use crate::modules::student::Student;
use crate::shared::errors::{AppError, AppResult, ErrorCode};
use crate::shared::infrastructure::AcademicRepositories;

/// Expected outcome of an existence assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Update, delete and association paths
    MustExist,
    /// Creation under a caller-supplied natural key
    MustNotExist,
}

pub fn faculty(repos: &mut dyn AcademicRepositories, id: i64) -> AppResult<Faculty> {
    repos.faculties().find_by_id(id)?.ok_or_else(|| {
        AppError::not_found(
            ErrorCode::FacultyNotFound,
            format!("Faculty with id {} not found", id),
        )
    })
}

pub fn department(repos: &mut dyn AcademicRepositories, id: i64) -> AppResult<Department> {
    repos.departments().find_by_id(id)?.ok_or_else(|| {
        AppError::not_found(
            ErrorCode::DepartmentNotFound,
            format!("Department with id {} not found", id),
        )
    })
}

pub fn level(repos: &mut dyn AcademicRepositories, id: i64) -> AppResult<Level> {
    repos.levels().find_by_id(id)?.ok_or_else(|| {
        AppError::not_found(
            ErrorCode::LevelNotFound,
            format!("Level with id {} not found", id),
        )
    })
}

pub fn course(repos: &mut dyn AcademicRepositories, code: &str) -> AppResult<Course> {
    repos.courses().find_by_code(code)?.ok_or_else(|| course_not_found(code))
}

pub fn student(repos: &mut dyn AcademicRepositories, id: i64) -> AppResult<Student> {
    repos.students().find_by_id(id)?.ok_or_else(|| {
        AppError::not_found(
            ErrorCode::StudentNotFound,
            format!("Student with id {} not found", id),
        )
    })
}

pub fn instructor(repos: &mut dyn AcademicRepositories, id: i64) -> AppResult<Instructor> {
    repos.instructors().find_by_id(id)?.ok_or_else(|| {
        AppError::not_found(
            ErrorCode::InstructorNotFound,
            format!("Instructor with id {} not found", id),
        )
    })
}

pub fn enrollment(
    repos: &mut dyn AcademicRepositories,
    id: &EnrollmentId,
) -> AppResult<Enrollment> {
    repos
        .enrollments()
        .find_by_id(id)?
        .ok_or_else(|| enrollment_not_found(id))
}

pub fn assert_faculty_exists(repos: &mut dyn AcademicRepositories, id: i64) -> AppResult<()> {
    if !repos.faculties().exists_by_id(id)? {
        return Err(AppError::not_found(
            ErrorCode::FacultyNotFound,
            format!("Faculty with id {} not found", id),
        ));
    }
    Ok(())
}

pub fn assert_department_exists(repos: &mut dyn AcademicRepositories, id: i64) -> AppResult<()> {
    if !repos.departments().exists_by_id(id)? {
        return Err(AppError::not_found(
            ErrorCode::DepartmentNotFound,
            format!("Department with id {} not found", id),
        ));
    }
    Ok(())
}

pub fn assert_level_exists(repos: &mut dyn AcademicRepositories, id: i64) -> AppResult<()> {
    if !repos.levels().exists_by_id(id)? {
        return Err(AppError::not_found(
            ErrorCode::LevelNotFound,
            format!("Level with id {} not found", id),
        ));
    }
    Ok(())
}

pub fn assert_student_exists(repos: &mut dyn AcademicRepositories, id: i64) -> AppResult<()> {
    if !repos.students().exists_by_id(id)? {
        return Err(AppError::not_found(
            ErrorCode::StudentNotFound,
            format!("Student with id {} not found", id),
        ));
    }
    Ok(())
}

pub fn assert_course_exists(
    repos: &mut dyn AcademicRepositories,
    code: &str,
    expected: Presence,
) -> AppResult<()> {
    let exists = repos.courses().exists_by_code(code)?;
    match (expected, exists) {
        (Presence::MustExist, false) => Err(course_not_found(code)),
        (Presence::MustNotExist, true) => Err(AppError::conflict(
            ErrorCode::CourseAlreadyExists,
            format!("Course with code {} already exists", code),
        )),
        _ => Ok(()),
    }
}

pub fn assert_enrollment_exists(
    repos: &mut dyn AcademicRepositories,
    id: &EnrollmentId,
    expected: Presence,
) -> AppResult<()> {
    let exists = repos.enrollments().exists_by_id(id)?;
    match (expected, exists) {
        (Presence::MustExist, false) => Err(enrollment_not_found(id)),
        (Presence::MustNotExist, true) => Err(AppError::conflict(
            ErrorCode::EnrollmentAlreadyExists,
            format!("Enrollment already exists for {}", id),
        )),
        _ => Ok(()),
    }
}

/// Resolves a required faculty reference: unset is BadRequest, unknown is NotFound.
pub fn required_faculty(
    repos: &mut dyn AcademicRepositories,
    id: Option<i64>,
    owner: &str,
) -> AppResult<Faculty> {
    let id = id.ok_or_else(|| {
        AppError::bad_request(
            ErrorCode::FacultyNotProvided,
            format!("{} must be in a faculty", owner),
        )
    })?;
    faculty(repos, id)
}

pub fn required_department(
    repos: &mut dyn AcademicRepositories,
    id: Option<i64>,
    owner: &str,
) -> AppResult<Department> {
    let id = id.ok_or_else(|| {
        AppError::bad_request(
            ErrorCode::DepartmentNotProvided,
            format!("{} must be in a department", owner),
        )
    })?;
    department(repos, id)
}

pub fn required_level(
    repos: &mut dyn AcademicRepositories,
    id: Option<i64>,
    owner: &str,
) -> AppResult<Level> {
    let id = id.ok_or_else(|| {
        AppError::bad_request(
            ErrorCode::LevelNotProvided,
            format!("{} must be in a level", owner),
        )
    })?;
    level(repos, id)
}

/// An absent reference is fine; a present one must resolve.
pub fn optional_department(
    repos: &mut dyn AcademicRepositories,
    id: Option<i64>,
) -> AppResult<Option<Department>> {
    id.map(|id| department(repos, id)).transpose()
}

fn course_not_found(code: &str) -> AppError {
    AppError::not_found(
        ErrorCode::CourseNotFound,
        format!("Course with code {} not found", code),
    )
}

fn enrollment_not_found(id: &EnrollmentId) -> AppError {
    AppError::not_found(
        ErrorCode::EnrollmentNotFound,
        format!("Enrollment not found for {}", id),
    )
}
