/// Diesel-based implementation of CourseRepository
use super::models::CourseModel;
use crate::modules::course::domain::{entities::Course, repository::CourseRepository};
use crate::schema::courses;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::postgres::{lower, PgTransaction};
use diesel::prelude::*;

impl CourseRepository for PgTransaction<'_> {
    fn find_all(&mut self) -> AppResult<Vec<Course>> {
        let rows = courses::table
            .order(courses::code.asc())
            .select(CourseModel::as_select())
            .load(self.conn)?;
        Ok(rows.into_iter().map(Course::from).collect())
    }

    fn find_by_code(&mut self, code: &str) -> AppResult<Option<Course>> {
        let row = courses::table
            .filter(lower(courses::code).eq(lower(code)))
            .select(CourseModel::as_select())
            .first(self.conn)
            .optional()?;
        Ok(row.map(Course::from))
    }

    fn exists_by_code(&mut self, code: &str) -> AppResult<bool> {
        let exists = diesel::select(diesel::dsl::exists(
            courses::table.filter(lower(courses::code).eq(lower(code))),
        ))
        .get_result::<bool>(self.conn)?;
        Ok(exists)
    }

    fn find_all_by_department_id(&mut self, department_id: i64) -> AppResult<Vec<Course>> {
        let rows = courses::table
            .filter(courses::department_id.eq(department_id))
            .order(courses::code.asc())
            .select(CourseModel::as_select())
            .load(self.conn)?;
        Ok(rows.into_iter().map(Course::from).collect())
    }

    fn count_by_department_id(&mut self, department_id: i64) -> AppResult<i64> {
        let count = courses::table
            .filter(courses::department_id.eq(department_id))
            .count()
            .get_result::<i64>(self.conn)?;
        Ok(count)
    }

    fn find_all_by_level_id(&mut self, level_id: i64) -> AppResult<Vec<Course>> {
        let rows = courses::table
            .filter(courses::level_id.eq(level_id))
            .order(courses::code.asc())
            .select(CourseModel::as_select())
            .load(self.conn)?;
        Ok(rows.into_iter().map(Course::from).collect())
    }

    fn count_by_level_id(&mut self, level_id: i64) -> AppResult<i64> {
        let count = courses::table
            .filter(courses::level_id.eq(level_id))
            .count()
            .get_result::<i64>(self.conn)?;
        Ok(count)
    }

    fn create(&mut self, course: &Course) -> AppResult<Course> {
        let inserted = diesel::insert_into(courses::table)
            .values(&CourseModel::from(course))
            .returning(CourseModel::as_returning())
            .get_result(self.conn)?;
        Ok(inserted.into())
    }

    fn update(&mut self, course: &Course) -> AppResult<Course> {
        let updated = diesel::update(courses::table.find(&course.code))
            .set(&CourseModel::from(course))
            .returning(CourseModel::as_returning())
            .get_result(self.conn)?;
        Ok(updated.into())
    }

    fn delete(&mut self, code: &str) -> AppResult<()> {
        diesel::delete(courses::table.filter(lower(courses::code).eq(lower(code))))
            .execute(self.conn)?;
        Ok(())
    }
}
