/// Diesel models for the levels table
use crate::modules::level::domain::entities::{Level, NewLevel};
use crate::schema::levels;
use diesel::prelude::*;

#[derive(Insertable, AsChangeset, Debug)]
#[diesel(table_name = levels)]
pub struct NewLevelModel<'a> {
    pub name: &'a str,
    pub faculty_id: i64,
}

impl<'a> From<&'a NewLevel> for NewLevelModel<'a> {
    fn from(level: &'a NewLevel) -> Self {
        Self {
            name: &level.name,
            faculty_id: level.faculty_id,
        }
    }
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = levels)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct LevelModel {
    pub id: i64,
    pub name: String,
    pub faculty_id: i64,
}

impl From<LevelModel> for Level {
    fn from(model: LevelModel) -> Self {
        Level {
            id: model.id,
            name: model.name,
            faculty_id: model.faculty_id,
        }
    }
}
