/// Diesel models for the faculties table
use crate::modules::faculty::domain::entities::Faculty;
use crate::schema::faculties;
use diesel::prelude::*;

#[derive(Insertable, Debug)]
#[diesel(table_name = faculties)]
pub struct NewFacultyModel<'a> {
    pub name: &'a str,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = faculties)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct FacultyModel {
    pub id: i64,
    pub name: String,
}

impl From<FacultyModel> for Faculty {
    fn from(model: FacultyModel) -> Self {
        Faculty {
            id: model.id,
            name: model.name,
        }
    }
}
