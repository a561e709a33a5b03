use crate::modules::course::domain::{entities::Course, repository::CourseRepository};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::memory::{restrict, MemoryTransaction};

impl CourseRepository for MemoryTransaction<'_> {
    fn find_all(&mut self) -> AppResult<Vec<Course>> {
        Ok(self.state.courses.values().cloned().collect())
    }

    fn find_by_code(&mut self, code: &str) -> AppResult<Option<Course>> {
        Ok(self
            .state
            .course_key(code)
            .and_then(|key| self.state.courses.get(&key).cloned()))
    }

    fn exists_by_code(&mut self, code: &str) -> AppResult<bool> {
        Ok(self.state.course_key(code).is_some())
    }

    fn find_all_by_department_id(&mut self, department_id: i64) -> AppResult<Vec<Course>> {
        Ok(self
            .state
            .courses
            .values()
            .filter(|c| c.department_id == department_id)
            .cloned()
            .collect())
    }

    fn count_by_department_id(&mut self, department_id: i64) -> AppResult<i64> {
        Ok(self
            .state
            .courses
            .values()
            .filter(|c| c.department_id == department_id)
            .count() as i64)
    }

    fn find_all_by_level_id(&mut self, level_id: i64) -> AppResult<Vec<Course>> {
        Ok(self
            .state
            .courses
            .values()
            .filter(|c| c.level_id == level_id)
            .cloned()
            .collect())
    }

    fn count_by_level_id(&mut self, level_id: i64) -> AppResult<i64> {
        Ok(self
            .state
            .courses
            .values()
            .filter(|c| c.level_id == level_id)
            .count() as i64)
    }

    fn create(&mut self, course: &Course) -> AppResult<Course> {
        restrict(self.state.course_key(&course.code).is_some(), || {
            format!("Course code {} is already taken", course.code)
        })?;
        self.state
            .courses
            .insert(course.code.clone(), course.clone());
        self.state.record_write();
        Ok(course.clone())
    }

    fn update(&mut self, course: &Course) -> AppResult<Course> {
        self.state
            .courses
            .insert(course.code.clone(), course.clone());
        self.state.record_write();
        Ok(course.clone())
    }

    /// Enrollments and teaching pairs restrict.
    fn delete(&mut self, code: &str) -> AppResult<()> {
        let Some(key) = self.state.course_key(code) else {
            return Ok(());
        };
        let state = &mut *self.state;
        restrict(
            state.enrollments.keys().any(|id| id.course_code == key),
            || format!("Course {} is still referenced by enrollments", key),
        )?;
        restrict(
            state.teaches.iter().any(|(_, taught)| *taught == key),
            || format!("Course {} is still referenced by instructors", key),
        )?;
        state.courses.remove(&key);
        state.record_write();
        Ok(())
    }
}
