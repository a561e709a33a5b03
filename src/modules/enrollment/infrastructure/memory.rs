use crate::modules::enrollment::domain::{
    entities::{Enrollment, EnrollmentId},
    repository::EnrollmentRepository,
};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::memory::{restrict, same_text, MemoryTransaction};

impl MemoryTransaction<'_> {
    /// Stored key of an enrollment, matching the course code case-insensitively
    fn enrollment_key(&self, id: &EnrollmentId) -> Option<EnrollmentId> {
        self.state
            .enrollments
            .keys()
            .find(|key| {
                key.student_id == id.student_id && same_text(&key.course_code, &id.course_code)
            })
            .cloned()
    }
}

impl EnrollmentRepository for MemoryTransaction<'_> {
    fn find_all(&mut self) -> AppResult<Vec<Enrollment>> {
        Ok(self.state.enrollments.values().cloned().collect())
    }

    fn find_by_id(&mut self, id: &EnrollmentId) -> AppResult<Option<Enrollment>> {
        Ok(self
            .enrollment_key(id)
            .and_then(|key| self.state.enrollments.get(&key).cloned()))
    }

    fn exists_by_id(&mut self, id: &EnrollmentId) -> AppResult<bool> {
        Ok(self.enrollment_key(id).is_some())
    }

    fn find_all_by_student_id(&mut self, student_id: i64) -> AppResult<Vec<Enrollment>> {
        Ok(self
            .state
            .enrollments
            .values()
            .filter(|e| e.student_id == student_id)
            .cloned()
            .collect())
    }

    fn find_all_by_course_code(&mut self, course_code: &str) -> AppResult<Vec<Enrollment>> {
        Ok(self
            .state
            .enrollments
            .values()
            .filter(|e| same_text(&e.course_code, course_code))
            .cloned()
            .collect())
    }

    fn count_by_student_id(&mut self, student_id: i64) -> AppResult<i64> {
        Ok(self
            .state
            .enrollments
            .keys()
            .filter(|id| id.student_id == student_id)
            .count() as i64)
    }

    fn count_by_course_code(&mut self, course_code: &str) -> AppResult<i64> {
        Ok(self
            .state
            .enrollments
            .keys()
            .filter(|id| same_text(&id.course_code, course_code))
            .count() as i64)
    }

    fn create(&mut self, enrollment: &Enrollment) -> AppResult<Enrollment> {
        let id = enrollment.id();
        restrict(self.enrollment_key(&id).is_some(), || {
            format!("Enrollment for {} already exists", id)
        })?;
        restrict(
            !self.state.students.contains_key(&enrollment.student_id)
                || self.state.course_key(&enrollment.course_code).is_none(),
            || format!("Enrollment for {} references a missing row", id),
        )?;
        self.state.enrollments.insert(id, enrollment.clone());
        self.state.record_write();
        Ok(enrollment.clone())
    }

    fn update(&mut self, enrollment: &Enrollment) -> AppResult<Enrollment> {
        self.state
            .enrollments
            .insert(enrollment.id(), enrollment.clone());
        self.state.record_write();
        Ok(enrollment.clone())
    }

    fn delete(&mut self, id: &EnrollmentId) -> AppResult<()> {
        if let Some(key) = self.enrollment_key(id) {
            self.state.enrollments.remove(&key);
            self.state.record_write();
        }
        Ok(())
    }
}
