/// Diesel model for the courses table
///
/// The code is the primary key, so the same row shape serves inserts, updates and reads.
use crate::modules::course::domain::entities::Course;
use crate::schema::courses;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Insertable, AsChangeset, Identifiable, Debug, Clone)]
#[diesel(table_name = courses)]
#[diesel(primary_key(code))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CourseModel {
    pub code: String,
    pub name: String,
    pub credits: i32,
    pub level_id: i64,
    pub department_id: i64,
}

impl From<CourseModel> for Course {
    fn from(model: CourseModel) -> Self {
        Course {
            code: model.code,
            name: model.name,
            credits: model.credits,
            level_id: model.level_id,
            department_id: model.department_id,
        }
    }
}

impl From<&Course> for CourseModel {
    fn from(course: &Course) -> Self {
        CourseModel {
            code: course.code.clone(),
            name: course.name.clone(),
            credits: course.credits,
            level_id: course.level_id,
            department_id: course.department_id,
        }
    }
}
