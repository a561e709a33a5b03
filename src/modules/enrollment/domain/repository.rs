/// Repository trait for enrollment persistence
use super::entities::{Enrollment, EnrollmentId};
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait EnrollmentRepository {
    fn find_all(&mut self) -> AppResult<Vec<Enrollment>>;

    fn find_by_id(&mut self, id: &EnrollmentId) -> AppResult<Option<Enrollment>>;

    fn exists_by_id(&mut self, id: &EnrollmentId) -> AppResult<bool>;

    fn find_all_by_student_id(&mut self, student_id: i64) -> AppResult<Vec<Enrollment>>;

    fn find_all_by_course_code(&mut self, course_code: &str) -> AppResult<Vec<Enrollment>>;

    fn count_by_student_id(&mut self, student_id: i64) -> AppResult<i64>;

    fn count_by_course_code(&mut self, course_code: &str) -> AppResult<i64>;

    fn create(&mut self, enrollment: &Enrollment) -> AppResult<Enrollment>;

    fn update(&mut self, enrollment: &Enrollment) -> AppResult<Enrollment>;

    fn delete(&mut self, id: &EnrollmentId) -> AppResult<()>;
}
