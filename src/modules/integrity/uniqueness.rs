use crate::log_debug;
use crate::shared::errors::{AppError, AppResult, ErrorCode};
use crate::shared::infrastructure::AcademicRepositories;

/// Where a name must be unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameScope {
    /// Faculty names, university-wide
    Faculty,
    /// Department names, university-wide
    Department,
    /// Level names, within one faculty
    Level { faculty_id: i64 },
}

/// Fails with Conflict when another entity in `scope` already uses `name`
/// (case-insensitive). `except` is the id of the entity being renamed.
pub fn assert_name_unique(
    repos: &mut dyn AcademicRepositories,
    name: &str,
    scope: NameScope,
    except: Option<i64>,
) -> AppResult<()> {
    let holder = match scope {
        NameScope::Faculty => repos
            .faculties()
            .find_by_name_ignore_case(name)?
            .map(|f| f.id),
        NameScope::Department => repos
            .departments()
            .find_by_name_ignore_case(name)?
            .map(|d| d.id),
        NameScope::Level { faculty_id } => repos
            .levels()
            .find_by_name_in_faculty(name, faculty_id)?
            .map(|l| l.id),
    };

    match holder {
        Some(id) if Some(id) != except => {
            log_debug!("Name '{}' already taken in {:?} by id {}", name, scope, id);
            Err(collision(name, scope))
        }
        _ => Ok(()),
    }
}

fn collision(name: &str, scope: NameScope) -> AppError {
    match scope {
        NameScope::Faculty => AppError::conflict(
            ErrorCode::FacultyAlreadyExists,
            format!("Faculty with name '{}' already exists", name),
        ),
        NameScope::Department => AppError::conflict(
            ErrorCode::DepartmentAlreadyExists,
            format!("Department with name '{}' already exists", name),
        ),
        NameScope::Level { .. } => AppError::conflict(
            ErrorCode::LevelAlreadyExists,
            format!("Level with name '{}' already exists in this faculty", name),
        ),
    }
}
