/// Diesel-based implementation of LevelRepository
use super::models::{LevelModel, NewLevelModel};
use crate::modules::level::domain::{
    entities::{Level, NewLevel},
    repository::LevelRepository,
};
use crate::schema::levels;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::postgres::{lower, PgTransaction};
use diesel::prelude::*;

impl LevelRepository for PgTransaction<'_> {
    fn find_all(&mut self) -> AppResult<Vec<Level>> {
        let rows = levels::table
            .order(levels::id.asc())
            .select(LevelModel::as_select())
            .load(self.conn)?;
        Ok(rows.into_iter().map(Level::from).collect())
    }

    fn find_by_id(&mut self, id: i64) -> AppResult<Option<Level>> {
        let row = levels::table
            .find(id)
            .select(LevelModel::as_select())
            .first(self.conn)
            .optional()?;
        Ok(row.map(Level::from))
    }

    fn exists_by_id(&mut self, id: i64) -> AppResult<bool> {
        let exists = diesel::select(diesel::dsl::exists(levels::table.find(id)))
            .get_result::<bool>(self.conn)?;
        Ok(exists)
    }

    fn find_by_name_in_faculty(
        &mut self,
        name: &str,
        faculty_id: i64,
    ) -> AppResult<Option<Level>> {
        let row = levels::table
            .filter(levels::faculty_id.eq(faculty_id))
            .filter(lower(levels::name).eq(lower(name)))
            .select(LevelModel::as_select())
            .first(self.conn)
            .optional()?;
        Ok(row.map(Level::from))
    }

    fn find_all_by_faculty_id(&mut self, faculty_id: i64) -> AppResult<Vec<Level>> {
        let rows = levels::table
            .filter(levels::faculty_id.eq(faculty_id))
            .order(levels::id.asc())
            .select(LevelModel::as_select())
            .load(self.conn)?;
        Ok(rows.into_iter().map(Level::from).collect())
    }

    fn create(&mut self, level: &NewLevel) -> AppResult<Level> {
        let inserted = diesel::insert_into(levels::table)
            .values(&NewLevelModel::from(level))
            .returning(LevelModel::as_returning())
            .get_result(self.conn)?;
        Ok(inserted.into())
    }

    fn update(&mut self, level: &Level) -> AppResult<Level> {
        let changes = NewLevelModel {
            name: &level.name,
            faculty_id: level.faculty_id,
        };
        let updated = diesel::update(levels::table.find(level.id))
            .set(&changes)
            .returning(LevelModel::as_returning())
            .get_result(self.conn)?;
        Ok(updated.into())
    }

    fn delete(&mut self, id: i64) -> AppResult<()> {
        diesel::delete(levels::table.find(id)).execute(self.conn)?;
        Ok(())
    }
}
