use crate::modules::student::domain::{
    entities::{NewStudent, Student},
    repository::StudentRepository,
};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::memory::{restrict, MemoryTransaction};

impl MemoryTransaction<'_> {
    fn students_in_faculty(&self, faculty_id: i64) -> impl Iterator<Item = &Student> {
        self.state.students.values().filter(move |s| {
            s.department_id
                .and_then(|d| self.state.departments.get(&d))
                .is_some_and(|d| d.faculty_id == faculty_id)
        })
    }
}

impl StudentRepository for MemoryTransaction<'_> {
    fn find_all(&mut self) -> AppResult<Vec<Student>> {
        Ok(self.state.students.values().cloned().collect())
    }

    fn find_by_id(&mut self, id: i64) -> AppResult<Option<Student>> {
        Ok(self.state.students.get(&id).cloned())
    }

    fn exists_by_id(&mut self, id: i64) -> AppResult<bool> {
        Ok(self.state.students.contains_key(&id))
    }

    fn find_all_by_faculty_id(&mut self, faculty_id: i64) -> AppResult<Vec<Student>> {
        Ok(self.students_in_faculty(faculty_id).cloned().collect())
    }

    fn count_by_faculty_id(&mut self, faculty_id: i64) -> AppResult<i64> {
        Ok(self.students_in_faculty(faculty_id).count() as i64)
    }

    fn count_by_department_id(&mut self, department_id: i64) -> AppResult<i64> {
        Ok(self
            .state
            .students
            .values()
            .filter(|s| s.department_id == Some(department_id))
            .count() as i64)
    }

    fn count_by_level_id(&mut self, level_id: i64) -> AppResult<i64> {
        Ok(self
            .state
            .students
            .values()
            .filter(|s| s.level_id == level_id)
            .count() as i64)
    }

    fn create(&mut self, student: &NewStudent) -> AppResult<Student> {
        restrict(
            student.user_id.is_some()
                && self
                    .state
                    .students
                    .values()
                    .any(|s| s.user_id == student.user_id),
            || "User is already linked to a student".to_string(),
        )?;
        let id = self.state.sequences.next_student();
        let created = Student {
            id,
            person: student.person.clone(),
            level_id: student.level_id,
            department_id: student.department_id,
            user_id: student.user_id,
        };
        self.state.students.insert(id, created.clone());
        self.state.record_write();
        Ok(created)
    }

    fn update(&mut self, student: &Student) -> AppResult<Student> {
        self.state.students.insert(student.id, student.clone());
        self.state.record_write();
        Ok(student.clone())
    }

    fn delete(&mut self, id: i64) -> AppResult<()> {
        restrict(
            self.state.enrollments.keys().any(|e| e.student_id == id),
            || format!("Student {} is still referenced by enrollments", id),
        )?;
        self.state.students.remove(&id);
        self.state.record_write();
        Ok(())
    }
}
