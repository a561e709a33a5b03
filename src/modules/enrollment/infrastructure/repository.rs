/// Diesel-based implementation of EnrollmentRepository
use super::models::EnrollmentModel;
use crate::modules::enrollment::domain::{
    entities::{Enrollment, EnrollmentId},
    repository::EnrollmentRepository,
};
use crate::schema::enrollments;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::postgres::{lower, PgTransaction};
use diesel::prelude::*;

impl EnrollmentRepository for PgTransaction<'_> {
    fn find_all(&mut self) -> AppResult<Vec<Enrollment>> {
        let rows = enrollments::table
            .order((enrollments::student_id.asc(), enrollments::course_code.asc()))
            .select(EnrollmentModel::as_select())
            .load(self.conn)?;
        Ok(rows.into_iter().map(Enrollment::from).collect())
    }

    fn find_by_id(&mut self, id: &EnrollmentId) -> AppResult<Option<Enrollment>> {
        let row = enrollments::table
            .filter(enrollments::student_id.eq(id.student_id))
            .filter(lower(enrollments::course_code).eq(lower(&id.course_code)))
            .select(EnrollmentModel::as_select())
            .first(self.conn)
            .optional()?;
        Ok(row.map(Enrollment::from))
    }

    fn exists_by_id(&mut self, id: &EnrollmentId) -> AppResult<bool> {
        let exists = diesel::select(diesel::dsl::exists(
            enrollments::table
                .filter(enrollments::student_id.eq(id.student_id))
                .filter(lower(enrollments::course_code).eq(lower(&id.course_code))),
        ))
        .get_result::<bool>(self.conn)?;
        Ok(exists)
    }

    fn find_all_by_student_id(&mut self, student_id: i64) -> AppResult<Vec<Enrollment>> {
        let rows = enrollments::table
            .filter(enrollments::student_id.eq(student_id))
            .order(enrollments::course_code.asc())
            .select(EnrollmentModel::as_select())
            .load(self.conn)?;
        Ok(rows.into_iter().map(Enrollment::from).collect())
    }

    fn find_all_by_course_code(&mut self, course_code: &str) -> AppResult<Vec<Enrollment>> {
        let rows = enrollments::table
            .filter(lower(enrollments::course_code).eq(lower(course_code)))
            .order(enrollments::student_id.asc())
            .select(EnrollmentModel::as_select())
            .load(self.conn)?;
        Ok(rows.into_iter().map(Enrollment::from).collect())
    }

    fn count_by_student_id(&mut self, student_id: i64) -> AppResult<i64> {
        let count = enrollments::table
            .filter(enrollments::student_id.eq(student_id))
            .count()
            .get_result::<i64>(self.conn)?;
        Ok(count)
    }

    fn count_by_course_code(&mut self, course_code: &str) -> AppResult<i64> {
        let count = enrollments::table
            .filter(lower(enrollments::course_code).eq(lower(course_code)))
            .count()
            .get_result::<i64>(self.conn)?;
        Ok(count)
    }

    fn create(&mut self, enrollment: &Enrollment) -> AppResult<Enrollment> {
        let inserted = diesel::insert_into(enrollments::table)
            .values(&EnrollmentModel::from(enrollment))
            .returning(EnrollmentModel::as_returning())
            .get_result(self.conn)?;
        Ok(inserted.into())
    }

    fn update(&mut self, enrollment: &Enrollment) -> AppResult<Enrollment> {
        let updated = diesel::update(
            enrollments::table.find((enrollment.student_id, &enrollment.course_code)),
        )
        .set(enrollments::grade.eq(enrollment.grade))
        .returning(EnrollmentModel::as_returning())
        .get_result(self.conn)?;
        Ok(updated.into())
    }

    fn delete(&mut self, id: &EnrollmentId) -> AppResult<()> {
        diesel::delete(
            enrollments::table
                .filter(enrollments::student_id.eq(id.student_id))
                .filter(lower(enrollments::course_code).eq(lower(&id.course_code))),
        )
        .execute(self.conn)?;
        Ok(())
    }
}
