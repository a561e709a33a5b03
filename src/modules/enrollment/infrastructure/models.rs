/// Diesel model for the enrollments table, keyed by (student_id, course_code)
use crate::modules::enrollment::domain::entities::Enrollment;
use crate::schema::enrollments;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Insertable, Identifiable, Debug, Clone)]
#[diesel(table_name = enrollments)]
#[diesel(primary_key(student_id, course_code))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EnrollmentModel {
    pub student_id: i64,
    pub course_code: String,
    pub grade: f64,
}

impl From<EnrollmentModel> for Enrollment {
    fn from(model: EnrollmentModel) -> Self {
        Enrollment {
            student_id: model.student_id,
            course_code: model.course_code,
            grade: model.grade,
        }
    }
}

impl From<&Enrollment> for EnrollmentModel {
    fn from(enrollment: &Enrollment) -> Self {
        EnrollmentModel {
            student_id: enrollment.student_id,
            course_code: enrollment.course_code.clone(),
            grade: enrollment.grade,
        }
    }
}
