use crate::modules::instructor::domain::{
    entities::{Instructor, NewInstructor},
    repository::InstructorRepository,
};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::memory::{restrict, same_text, MemoryTransaction};

impl InstructorRepository for MemoryTransaction<'_> {
    fn find_all(&mut self) -> AppResult<Vec<Instructor>> {
        Ok(self.state.instructors.values().cloned().collect())
    }

    fn find_by_id(&mut self, id: i64) -> AppResult<Option<Instructor>> {
        Ok(self.state.instructors.get(&id).cloned())
    }

    fn exists_by_id(&mut self, id: i64) -> AppResult<bool> {
        Ok(self.state.instructors.contains_key(&id))
    }

    fn find_all_by_department_id(&mut self, department_id: i64) -> AppResult<Vec<Instructor>> {
        Ok(self
            .state
            .instructors
            .values()
            .filter(|i| i.department_id == department_id)
            .cloned()
            .collect())
    }

    fn count_by_department_id(&mut self, department_id: i64) -> AppResult<i64> {
        Ok(self
            .state
            .instructors
            .values()
            .filter(|i| i.department_id == department_id)
            .count() as i64)
    }

    fn create(&mut self, instructor: &NewInstructor) -> AppResult<Instructor> {
        restrict(
            instructor.user_id.is_some()
                && self
                    .state
                    .instructors
                    .values()
                    .any(|i| i.user_id == instructor.user_id),
            || "User is already linked to an instructor".to_string(),
        )?;
        let id = self.state.sequences.next_instructor();
        let created = Instructor {
            id,
            person: instructor.person.clone(),
            department_id: instructor.department_id,
            user_id: instructor.user_id,
        };
        self.state.instructors.insert(id, created.clone());
        self.state.record_write();
        Ok(created)
    }

    fn update(&mut self, instructor: &Instructor) -> AppResult<Instructor> {
        self.state
            .instructors
            .insert(instructor.id, instructor.clone());
        self.state.record_write();
        Ok(instructor.clone())
    }

    fn delete(&mut self, id: i64) -> AppResult<()> {
        restrict(
            self.state.teaches.iter().any(|(teacher, _)| *teacher == id),
            || format!("Instructor {} is still referenced by courses", id),
        )?;
        self.state.instructors.remove(&id);
        self.state.record_write();
        Ok(())
    }

    fn course_codes_of(&mut self, instructor_id: i64) -> AppResult<Vec<String>> {
        Ok(self
            .state
            .teaches
            .iter()
            .filter(|(teacher, _)| *teacher == instructor_id)
            .map(|(_, code)| code.clone())
            .collect())
    }

    fn instructor_ids_of(&mut self, course_code: &str) -> AppResult<Vec<i64>> {
        let mut ids: Vec<i64> = self
            .state
            .teaches
            .iter()
            .filter(|(_, code)| same_text(code, course_code))
            .map(|(teacher, _)| *teacher)
            .collect();
        ids.sort_unstable();
        Ok(ids)
    }

    fn is_teaching(&mut self, instructor_id: i64, course_code: &str) -> AppResult<bool> {
        Ok(self
            .state
            .teaches
            .iter()
            .any(|(teacher, code)| *teacher == instructor_id && same_text(code, course_code)))
    }

    fn attach(&mut self, instructor_id: i64, course_code: &str) -> AppResult<()> {
        let course_key = self.state.course_key(course_code);
        restrict(
            !self.state.instructors.contains_key(&instructor_id) || course_key.is_none(),
            || {
                format!(
                    "Teaching pair ({}, {}) references a missing row",
                    instructor_id, course_code
                )
            },
        )?;
        if let Some(code) = course_key {
            if self.state.teaches.insert((instructor_id, code)) {
                self.state.record_write();
            }
        }
        Ok(())
    }

    fn detach_instructor(&mut self, instructor_id: i64) -> AppResult<usize> {
        let before = self.state.teaches.len();
        self.state
            .teaches
            .retain(|(teacher, _)| *teacher != instructor_id);
        let removed = before - self.state.teaches.len();
        if removed > 0 {
            self.state.record_write();
        }
        Ok(removed)
    }

    fn detach_course(&mut self, course_code: &str) -> AppResult<usize> {
        let before = self.state.teaches.len();
        self.state
            .teaches
            .retain(|(_, code)| !same_text(code, course_code));
        let removed = before - self.state.teaches.len();
        if removed > 0 {
            self.state.record_write();
        }
        Ok(removed)
    }
}
