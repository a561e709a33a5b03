/// Diesel models for the departments table
use crate::modules::department::domain::entities::{Department, NewDepartment};
use crate::schema::departments;
use diesel::prelude::*;

#[derive(Insertable, AsChangeset, Debug)]
#[diesel(table_name = departments)]
pub struct NewDepartmentModel<'a> {
    pub name: &'a str,
    pub faculty_id: i64,
}

impl<'a> From<&'a NewDepartment> for NewDepartmentModel<'a> {
    fn from(department: &'a NewDepartment) -> Self {
        Self {
            name: &department.name,
            faculty_id: department.faculty_id,
        }
    }
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = departments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DepartmentModel {
    pub id: i64,
    pub name: String,
    pub faculty_id: i64,
}

impl From<DepartmentModel> for Department {
    fn from(model: DepartmentModel) -> Self {
        Department {
            id: model.id,
            name: model.name,
            faculty_id: model.faculty_id,
        }
    }
}
