/// Diesel-based implementation of InstructorRepository
use super::models::{InstructorModel, NewInstructorModel, TeachingModel};
use crate::modules::instructor::domain::{
    entities::{Instructor, NewInstructor},
    repository::InstructorRepository,
};
use crate::schema::{instructors, teaches};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::postgres::{lower, PgTransaction};
use diesel::prelude::*;

impl InstructorRepository for PgTransaction<'_> {
    fn find_all(&mut self) -> AppResult<Vec<Instructor>> {
        let rows = instructors::table
            .order(instructors::id.asc())
            .select(InstructorModel::as_select())
            .load(self.conn)?;
        Ok(rows.into_iter().map(Instructor::from).collect())
    }

    fn find_by_id(&mut self, id: i64) -> AppResult<Option<Instructor>> {
        let row = instructors::table
            .find(id)
            .select(InstructorModel::as_select())
            .first(self.conn)
            .optional()?;
        Ok(row.map(Instructor::from))
    }

    fn exists_by_id(&mut self, id: i64) -> AppResult<bool> {
        let exists = diesel::select(diesel::dsl::exists(instructors::table.find(id)))
            .get_result::<bool>(self.conn)?;
        Ok(exists)
    }

    fn find_all_by_department_id(&mut self, department_id: i64) -> AppResult<Vec<Instructor>> {
        let rows = instructors::table
            .filter(instructors::department_id.eq(department_id))
            .order(instructors::id.asc())
            .select(InstructorModel::as_select())
            .load(self.conn)?;
        Ok(rows.into_iter().map(Instructor::from).collect())
    }

    fn count_by_department_id(&mut self, department_id: i64) -> AppResult<i64> {
        let count = instructors::table
            .filter(instructors::department_id.eq(department_id))
            .count()
            .get_result::<i64>(self.conn)?;
        Ok(count)
    }

    fn create(&mut self, instructor: &NewInstructor) -> AppResult<Instructor> {
        let inserted = diesel::insert_into(instructors::table)
            .values(&NewInstructorModel::from(instructor))
            .returning(InstructorModel::as_returning())
            .get_result(self.conn)?;
        Ok(inserted.into())
    }

    fn update(&mut self, instructor: &Instructor) -> AppResult<Instructor> {
        let updated = diesel::update(instructors::table.find(instructor.id))
            .set(&NewInstructorModel::from(instructor))
            .returning(InstructorModel::as_returning())
            .get_result(self.conn)?;
        Ok(updated.into())
    }

    fn delete(&mut self, id: i64) -> AppResult<()> {
        diesel::delete(instructors::table.find(id)).execute(self.conn)?;
        Ok(())
    }

    fn course_codes_of(&mut self, instructor_id: i64) -> AppResult<Vec<String>> {
        let codes = teaches::table
            .filter(teaches::instructor_id.eq(instructor_id))
            .order(teaches::course_code.asc())
            .select(teaches::course_code)
            .load::<String>(self.conn)?;
        Ok(codes)
    }

    fn instructor_ids_of(&mut self, course_code: &str) -> AppResult<Vec<i64>> {
        let ids = teaches::table
            .filter(lower(teaches::course_code).eq(lower(course_code)))
            .order(teaches::instructor_id.asc())
            .select(teaches::instructor_id)
            .load::<i64>(self.conn)?;
        Ok(ids)
    }

    fn is_teaching(&mut self, instructor_id: i64, course_code: &str) -> AppResult<bool> {
        let exists = diesel::select(diesel::dsl::exists(
            teaches::table
                .filter(teaches::instructor_id.eq(instructor_id))
                .filter(lower(teaches::course_code).eq(lower(course_code))),
        ))
        .get_result::<bool>(self.conn)?;
        Ok(exists)
    }

    fn attach(&mut self, instructor_id: i64, course_code: &str) -> AppResult<()> {
        diesel::insert_into(teaches::table)
            .values(&TeachingModel {
                instructor_id,
                course_code,
            })
            .on_conflict_do_nothing()
            .execute(self.conn)?;
        Ok(())
    }

    fn detach_instructor(&mut self, instructor_id: i64) -> AppResult<usize> {
        let removed =
            diesel::delete(teaches::table.filter(teaches::instructor_id.eq(instructor_id)))
                .execute(self.conn)?;
        Ok(removed)
    }

    fn detach_course(&mut self, course_code: &str) -> AppResult<usize> {
        let removed = diesel::delete(
            teaches::table.filter(lower(teaches::course_code).eq(lower(course_code))),
        )
        .execute(self.conn)?;
        Ok(removed)
    }
}
