/// Repository trait for faculty persistence
///
/// Methods run inside the caller's unit of work; they never open their own transaction.
use super::entities::{Faculty, FacultyInput};
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait FacultyRepository {
    fn find_all(&mut self) -> AppResult<Vec<Faculty>>;

    fn find_by_id(&mut self, id: i64) -> AppResult<Option<Faculty>>;

    fn exists_by_id(&mut self, id: i64) -> AppResult<bool>;

    /// Case-insensitive match on the name
    fn find_by_name_ignore_case(&mut self, name: &str) -> AppResult<Option<Faculty>>;

    fn create(&mut self, faculty: &FacultyInput) -> AppResult<Faculty>;

    fn update(&mut self, faculty: &Faculty) -> AppResult<Faculty>;

    /// Deletes the faculty; owned levels and departments cascade with it
    fn delete(&mut self, id: i64) -> AppResult<()>;
}
