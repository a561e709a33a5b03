/// Diesel-based implementation of StudentRepository
use super::models::{NewStudentModel, StudentModel};
use crate::modules::student::domain::{
    entities::{NewStudent, Student},
    repository::StudentRepository,
};
use crate::schema::{departments, students};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::postgres::PgTransaction;
use diesel::prelude::*;

impl StudentRepository for PgTransaction<'_> {
    fn find_all(&mut self) -> AppResult<Vec<Student>> {
        let rows = students::table
            .order(students::id.asc())
            .select(StudentModel::as_select())
            .load(self.conn)?;
        Ok(rows.into_iter().map(Student::from).collect())
    }

    fn find_by_id(&mut self, id: i64) -> AppResult<Option<Student>> {
        let row = students::table
            .find(id)
            .select(StudentModel::as_select())
            .first(self.conn)
            .optional()?;
        Ok(row.map(Student::from))
    }

    fn exists_by_id(&mut self, id: i64) -> AppResult<bool> {
        let exists = diesel::select(diesel::dsl::exists(students::table.find(id)))
            .get_result::<bool>(self.conn)?;
        Ok(exists)
    }

    fn find_all_by_faculty_id(&mut self, faculty_id: i64) -> AppResult<Vec<Student>> {
        let rows = students::table
            .inner_join(departments::table)
            .filter(departments::faculty_id.eq(faculty_id))
            .order(students::id.asc())
            .select(StudentModel::as_select())
            .load(self.conn)?;
        Ok(rows.into_iter().map(Student::from).collect())
    }

    fn count_by_faculty_id(&mut self, faculty_id: i64) -> AppResult<i64> {
        let count = students::table
            .inner_join(departments::table)
            .filter(departments::faculty_id.eq(faculty_id))
            .count()
            .get_result::<i64>(self.conn)?;
        Ok(count)
    }

    fn count_by_department_id(&mut self, department_id: i64) -> AppResult<i64> {
        let count = students::table
            .filter(students::department_id.eq(department_id))
            .count()
            .get_result::<i64>(self.conn)?;
        Ok(count)
    }

    fn count_by_level_id(&mut self, level_id: i64) -> AppResult<i64> {
        let count = students::table
            .filter(students::level_id.eq(level_id))
            .count()
            .get_result::<i64>(self.conn)?;
        Ok(count)
    }

    fn create(&mut self, student: &NewStudent) -> AppResult<Student> {
        let inserted = diesel::insert_into(students::table)
            .values(&NewStudentModel::from(student))
            .returning(StudentModel::as_returning())
            .get_result(self.conn)?;
        Ok(inserted.into())
    }

    fn update(&mut self, student: &Student) -> AppResult<Student> {
        let updated = diesel::update(students::table.find(student.id))
            .set(&NewStudentModel::from(student))
            .returning(StudentModel::as_returning())
            .get_result(self.conn)?;
        Ok(updated.into())
    }

    fn delete(&mut self, id: i64) -> AppResult<()> {
        diesel::delete(students::table.find(id)).execute(self.conn)?;
        Ok(())
    }
}
