/// Diesel models for the instructors and teaches tables
use crate::modules::instructor::domain::entities::{Instructor, NewInstructor};
use crate::schema::{instructors, teaches};
use crate::shared::domain::Person;
use chrono::NaiveDate;
use diesel::prelude::*;

#[derive(Insertable, AsChangeset, Debug)]
#[diesel(table_name = instructors)]
#[diesel(treat_none_as_null = true)]
pub struct NewInstructorModel<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub phone_number: &'a str,
    pub date_of_birth: NaiveDate,
    pub gender: Option<&'a str>,
    pub department_id: i64,
    pub user_id: Option<i64>,
}

impl<'a> NewInstructorModel<'a> {
    fn build(person: &'a Person, department_id: i64, user_id: Option<i64>) -> Self {
        Self {
            first_name: &person.first_name,
            last_name: &person.last_name,
            phone_number: &person.phone_number,
            date_of_birth: person.date_of_birth,
            gender: person.gender.as_deref(),
            department_id,
            user_id,
        }
    }
}

impl<'a> From<&'a NewInstructor> for NewInstructorModel<'a> {
    fn from(instructor: &'a NewInstructor) -> Self {
        Self::build(
            &instructor.person,
            instructor.department_id,
            instructor.user_id,
        )
    }
}

impl<'a> From<&'a Instructor> for NewInstructorModel<'a> {
    fn from(instructor: &'a Instructor) -> Self {
        Self::build(
            &instructor.person,
            instructor.department_id,
            instructor.user_id,
        )
    }
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = instructors)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct InstructorModel {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub date_of_birth: NaiveDate,
    pub gender: Option<String>,
    pub department_id: i64,
    pub user_id: Option<i64>,
}

impl From<InstructorModel> for Instructor {
    fn from(model: InstructorModel) -> Self {
        Instructor {
            id: model.id,
            person: Person {
                first_name: model.first_name,
                last_name: model.last_name,
                phone_number: model.phone_number,
                date_of_birth: model.date_of_birth,
                gender: model.gender,
            },
            department_id: model.department_id,
            user_id: model.user_id,
        }
    }
}

/// One (instructor, course) teaching pair
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = teaches)]
pub struct TeachingModel<'a> {
    pub instructor_id: i64,
    pub course_code: &'a str,
}
