/// Repository trait for student persistence
use super::entities::{NewStudent, Student};
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait StudentRepository {
    fn find_all(&mut self) -> AppResult<Vec<Student>>;

    fn find_by_id(&mut self, id: i64) -> AppResult<Option<Student>>;

    fn exists_by_id(&mut self, id: i64) -> AppResult<bool>;

    /// Students whose department belongs to the faculty
    fn find_all_by_faculty_id(&mut self, faculty_id: i64) -> AppResult<Vec<Student>>;

    fn count_by_faculty_id(&mut self, faculty_id: i64) -> AppResult<i64>;

    fn count_by_department_id(&mut self, department_id: i64) -> AppResult<i64>;

    fn count_by_level_id(&mut self, level_id: i64) -> AppResult<i64>;

    fn create(&mut self, student: &NewStudent) -> AppResult<Student>;

    fn update(&mut self, student: &Student) -> AppResult<Student>;

    fn delete(&mut self, id: i64) -> AppResult<()>;
}
