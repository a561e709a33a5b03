use crate::modules::faculty::domain::{
    entities::{Faculty, FacultyInput},
    repository::FacultyRepository,
};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::memory::{restrict, same_text, MemoryTransaction};

impl FacultyRepository for MemoryTransaction<'_> {
    fn find_all(&mut self) -> AppResult<Vec<Faculty>> {
        Ok(self.state.faculties.values().cloned().collect())
    }

    fn find_by_id(&mut self, id: i64) -> AppResult<Option<Faculty>> {
        Ok(self.state.faculties.get(&id).cloned())
    }

    fn exists_by_id(&mut self, id: i64) -> AppResult<bool> {
        Ok(self.state.faculties.contains_key(&id))
    }

    fn find_by_name_ignore_case(&mut self, name: &str) -> AppResult<Option<Faculty>> {
        Ok(self
            .state
            .faculties
            .values()
            .find(|f| same_text(&f.name, name))
            .cloned())
    }

    fn create(&mut self, faculty: &FacultyInput) -> AppResult<Faculty> {
        let id = self.state.sequences.next_faculty();
        let created = Faculty {
            id,
            name: faculty.name.clone(),
        };
        self.state.faculties.insert(id, created.clone());
        self.state.record_write();
        Ok(created)
    }

    fn update(&mut self, faculty: &Faculty) -> AppResult<Faculty> {
        self.state.faculties.insert(faculty.id, faculty.clone());
        self.state.record_write();
        Ok(faculty.clone())
    }

    /// Departments and levels cascade; anything still referencing them restricts.
    fn delete(&mut self, id: i64) -> AppResult<()> {
        let state = &mut *self.state;
        let department_ids: Vec<i64> = state
            .departments
            .values()
            .filter(|d| d.faculty_id == id)
            .map(|d| d.id)
            .collect();
        let level_ids: Vec<i64> = state
            .levels
            .values()
            .filter(|l| l.faculty_id == id)
            .map(|l| l.id)
            .collect();

        restrict(
            state.courses.values().any(|c| {
                department_ids.contains(&c.department_id) || level_ids.contains(&c.level_id)
            }),
            || format!("Faculty {} still has courses under its departments or levels", id),
        )?;
        restrict(
            state
                .instructors
                .values()
                .any(|i| department_ids.contains(&i.department_id)),
            || format!("Faculty {} still has instructors under its departments", id),
        )?;
        restrict(
            state.students.values().any(|s| level_ids.contains(&s.level_id)),
            || format!("Faculty {} still has students in its levels", id),
        )?;

        for student in state.students.values_mut() {
            if student
                .department_id
                .is_some_and(|d| department_ids.contains(&d))
            {
                student.department_id = None;
            }
        }
        state.departments.retain(|_, d| d.faculty_id != id);
        state.levels.retain(|_, l| l.faculty_id != id);
        state.faculties.remove(&id);
        state.record_write();
        Ok(())
    }
}
