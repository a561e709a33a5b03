/// Repository trait for department persistence
use super::entities::{Department, NewDepartment};
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait DepartmentRepository {
    fn find_all(&mut self) -> AppResult<Vec<Department>>;

    fn find_by_id(&mut self, id: i64) -> AppResult<Option<Department>>;

    fn exists_by_id(&mut self, id: i64) -> AppResult<bool>;

    /// Department names are unique across the whole university
    fn find_by_name_ignore_case(&mut self, name: &str) -> AppResult<Option<Department>>;

    fn find_all_by_faculty_id(&mut self, faculty_id: i64) -> AppResult<Vec<Department>>;

    fn count_by_faculty_id(&mut self, faculty_id: i64) -> AppResult<i64>;

    fn create(&mut self, department: &NewDepartment) -> AppResult<Department>;

    fn update(&mut self, department: &Department) -> AppResult<Department>;

    fn delete(&mut self, id: i64) -> AppResult<()>;
}
