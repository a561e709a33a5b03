/// Repository trait for course persistence
///
/// Codes are matched case-insensitively; returned courses carry the stored spelling.
use super::entities::Course;
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait CourseRepository {
    fn find_all(&mut self) -> AppResult<Vec<Course>>;

    fn find_by_code(&mut self, code: &str) -> AppResult<Option<Course>>;

    fn exists_by_code(&mut self, code: &str) -> AppResult<bool>;

    fn find_all_by_department_id(&mut self, department_id: i64) -> AppResult<Vec<Course>>;

    fn count_by_department_id(&mut self, department_id: i64) -> AppResult<i64>;

    fn find_all_by_level_id(&mut self, level_id: i64) -> AppResult<Vec<Course>>;

    fn count_by_level_id(&mut self, level_id: i64) -> AppResult<i64>;

    fn create(&mut self, course: &Course) -> AppResult<Course>;

    fn update(&mut self, course: &Course) -> AppResult<Course>;

    fn delete(&mut self, code: &str) -> AppResult<()>;
}
