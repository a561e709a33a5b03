/// Diesel models for the students table
use crate::modules::student::domain::entities::{NewStudent, Student};
use crate::schema::students;
use crate::shared::domain::Person;
use chrono::NaiveDate;
use diesel::prelude::*;

/// Insert and update shape; `None` writes NULL so a department can be cleared.
#[derive(Insertable, AsChangeset, Debug)]
#[diesel(table_name = students)]
#[diesel(treat_none_as_null = true)]
pub struct NewStudentModel<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub phone_number: &'a str,
    pub date_of_birth: NaiveDate,
    pub gender: Option<&'a str>,
    pub level_id: i64,
    pub department_id: Option<i64>,
    pub user_id: Option<i64>,
}

impl<'a> NewStudentModel<'a> {
    fn build(
        person: &'a Person,
        level_id: i64,
        department_id: Option<i64>,
        user_id: Option<i64>,
    ) -> Self {
        Self {
            first_name: &person.first_name,
            last_name: &person.last_name,
            phone_number: &person.phone_number,
            date_of_birth: person.date_of_birth,
            gender: person.gender.as_deref(),
            level_id,
            department_id,
            user_id,
        }
    }
}

impl<'a> From<&'a NewStudent> for NewStudentModel<'a> {
    fn from(student: &'a NewStudent) -> Self {
        Self::build(
            &student.person,
            student.level_id,
            student.department_id,
            student.user_id,
        )
    }
}

impl<'a> From<&'a Student> for NewStudentModel<'a> {
    fn from(student: &'a Student) -> Self {
        Self::build(
            &student.person,
            student.level_id,
            student.department_id,
            student.user_id,
        )
    }
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = students)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StudentModel {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub date_of_birth: NaiveDate,
    pub gender: Option<String>,
    pub level_id: i64,
    pub department_id: Option<i64>,
    pub user_id: Option<i64>,
}

impl From<StudentModel> for Student {
    fn from(model: StudentModel) -> Self {
        Student {
            id: model.id,
            person: Person {
                first_name: model.first_name,
                last_name: model.last_name,
                phone_number: model.phone_number,
                date_of_birth: model.date_of_birth,
                gender: model.gender,
            },
            level_id: model.level_id,
            department_id: model.department_id,
            user_id: model.user_id,
        }
    }
}
