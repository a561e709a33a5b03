/// Repository trait for instructor persistence and the teaching association
///
/// The association is stored once as (instructor_id, course_code) pairs; both
/// directions are answered from that index.
use super::entities::{Instructor, NewInstructor};
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait InstructorRepository {
    fn find_all(&mut self) -> AppResult<Vec<Instructor>>;

    fn find_by_id(&mut self, id: i64) -> AppResult<Option<Instructor>>;

    fn exists_by_id(&mut self, id: i64) -> AppResult<bool>;

    fn find_all_by_department_id(&mut self, department_id: i64) -> AppResult<Vec<Instructor>>;

    fn count_by_department_id(&mut self, department_id: i64) -> AppResult<i64>;

    fn create(&mut self, instructor: &NewInstructor) -> AppResult<Instructor>;

    fn update(&mut self, instructor: &Instructor) -> AppResult<Instructor>;

    fn delete(&mut self, id: i64) -> AppResult<()>;

    /// Course codes taught by the instructor, ordered by code
    fn course_codes_of(&mut self, instructor_id: i64) -> AppResult<Vec<String>>;

    /// Instructors teaching the course, ordered by id
    fn instructor_ids_of(&mut self, course_code: &str) -> AppResult<Vec<i64>>;

    fn is_teaching(&mut self, instructor_id: i64, course_code: &str) -> AppResult<bool>;

    fn attach(&mut self, instructor_id: i64, course_code: &str) -> AppResult<()>;

    /// Removes every pair for the instructor; returns the number removed
    fn detach_instructor(&mut self, instructor_id: i64) -> AppResult<usize>;

    /// Removes every pair for the course; returns the number removed
    fn detach_course(&mut self, course_code: &str) -> AppResult<usize>;
}
