use crate::modules::department::domain::{
    entities::{Department, NewDepartment},
    repository::DepartmentRepository,
};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::memory::{restrict, same_text, MemoryTransaction};

impl DepartmentRepository for MemoryTransaction<'_> {
    fn find_all(&mut self) -> AppResult<Vec<Department>> {
        Ok(self.state.departments.values().cloned().collect())
    }

    fn find_by_id(&mut self, id: i64) -> AppResult<Option<Department>> {
        Ok(self.state.departments.get(&id).cloned())
    }

    fn exists_by_id(&mut self, id: i64) -> AppResult<bool> {
        Ok(self.state.departments.contains_key(&id))
    }

    fn find_by_name_ignore_case(&mut self, name: &str) -> AppResult<Option<Department>> {
        Ok(self
            .state
            .departments
            .values()
            .find(|d| same_text(&d.name, name))
            .cloned())
    }

    fn find_all_by_faculty_id(&mut self, faculty_id: i64) -> AppResult<Vec<Department>> {
        Ok(self
            .state
            .departments
            .values()
            .filter(|d| d.faculty_id == faculty_id)
            .cloned()
            .collect())
    }

    fn count_by_faculty_id(&mut self, faculty_id: i64) -> AppResult<i64> {
        Ok(self
            .state
            .departments
            .values()
            .filter(|d| d.faculty_id == faculty_id)
            .count() as i64)
    }

    fn create(&mut self, department: &NewDepartment) -> AppResult<Department> {
        let id = self.state.sequences.next_department();
        let created = Department {
            id,
            name: department.name.clone(),
            faculty_id: department.faculty_id,
        };
        self.state.departments.insert(id, created.clone());
        self.state.record_write();
        Ok(created)
    }

    fn update(&mut self, department: &Department) -> AppResult<Department> {
        self.state
            .departments
            .insert(department.id, department.clone());
        self.state.record_write();
        Ok(department.clone())
    }

    /// Courses and instructors restrict; students lose their department.
    fn delete(&mut self, id: i64) -> AppResult<()> {
        let state = &mut *self.state;
        restrict(
            state.courses.values().any(|c| c.department_id == id),
            || format!("Department {} is still referenced by courses", id),
        )?;
        restrict(
            state.instructors.values().any(|i| i.department_id == id),
            || format!("Department {} is still referenced by instructors", id),
        )?;

        for student in state.students.values_mut() {
            if student.department_id == Some(id) {
                student.department_id = None;
            }
        }
        state.departments.remove(&id);
        state.record_write();
        Ok(())
    }
}
