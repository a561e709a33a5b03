use crate::log_debug;
use crate::shared::errors::{AppError, AppResult, ErrorCode};
use crate::shared::infrastructure::AcademicRepositories;

/// Entity about to be deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionTarget<'a> {
    Faculty(i64),
    Department(i64),
    Level(i64),
    Course(&'a str),
    Student(i64),
    Instructor(i64),
}

/// Fails with Conflict while dependents would be orphaned by the delete.
///
/// Only the checks below are performed. A faculty's levels cascade with it, so a
/// level still holding students or courses is left for the store to reject.
pub fn can_delete(
    repos: &mut dyn AcademicRepositories,
    target: DeletionTarget<'_>,
) -> AppResult<()> {
    match target {
        DeletionTarget::Faculty(id) => {
            if repos.departments().count_by_faculty_id(id)? > 0 {
                return Err(AppError::conflict(
                    ErrorCode::FacultyHasDepartments,
                    format!(
                        "Cannot delete faculty with id {} because it has associated departments",
                        id
                    ),
                ));
            }
        }
        DeletionTarget::Department(id) => {
            let blocked = repos.students().count_by_department_id(id)? > 0
                || repos.courses().count_by_department_id(id)? > 0
                || repos.instructors().count_by_department_id(id)? > 0;
            if blocked {
                return Err(AppError::conflict(
                    ErrorCode::DepartmentHasAssociations,
                    format!(
                        "Cannot delete department with id {} because it has associated students or courses",
                        id
                    ),
                ));
            }
        }
        DeletionTarget::Level(id) => {
            let blocked = repos.students().count_by_level_id(id)? > 0
                || repos.courses().count_by_level_id(id)? > 0;
            if blocked {
                return Err(AppError::conflict(
                    ErrorCode::LevelDeleteConflict,
                    format!(
                        "Cannot delete level with id {} because it has associated students or courses",
                        id
                    ),
                ));
            }
        }
        DeletionTarget::Course(code) => {
            if repos.enrollments().count_by_course_code(code)? > 0 {
                return Err(AppError::conflict(
                    ErrorCode::CourseHasEnrollments,
                    "Cannot delete course with existing enrollments",
                ));
            }
        }
        DeletionTarget::Student(id) => {
            if repos.enrollments().count_by_student_id(id)? > 0 {
                return Err(AppError::conflict(
                    ErrorCode::StudentHasEnrollments,
                    format!(
                        "Cannot delete student with id {} because they are enrolled in courses",
                        id
                    ),
                ));
            }
        }
        // Teaching pairs are detached, not guarded.
        DeletionTarget::Instructor(_) => {}
    }
    Ok(())
}

/// Removes association rows that would otherwise dangle after the delete.
/// Returns the number of rows removed.
pub fn detach_associations(
    repos: &mut dyn AcademicRepositories,
    target: DeletionTarget<'_>,
) -> AppResult<usize> {
    let removed = match target {
        DeletionTarget::Course(code) => repos.instructors().detach_course(code)?,
        DeletionTarget::Instructor(id) => repos.instructors().detach_instructor(id)?,
        _ => 0,
    };
    if removed > 0 {
        log_debug!("Detached {} teaching pair(s) for {:?}", removed, target);
    }
    Ok(removed)
}
