/// Repository trait for level persistence
use super::entities::{Level, NewLevel};
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait LevelRepository {
    fn find_all(&mut self) -> AppResult<Vec<Level>>;

    fn find_by_id(&mut self, id: i64) -> AppResult<Option<Level>>;

    fn exists_by_id(&mut self, id: i64) -> AppResult<bool>;

    /// Case-insensitive match scoped to one faculty
    fn find_by_name_in_faculty(&mut self, name: &str, faculty_id: i64)
        -> AppResult<Option<Level>>;

    fn find_all_by_faculty_id(&mut self, faculty_id: i64) -> AppResult<Vec<Level>>;

    fn create(&mut self, level: &NewLevel) -> AppResult<Level>;

    fn update(&mut self, level: &Level) -> AppResult<Level>;

    fn delete(&mut self, id: i64) -> AppResult<()>;
}
