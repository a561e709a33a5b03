/// Diesel-based implementation of FacultyRepository
use super::models::{FacultyModel, NewFacultyModel};
use crate::modules::faculty::domain::{
    entities::{Faculty, FacultyInput},
    repository::FacultyRepository,
};
use crate::schema::faculties;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::postgres::{lower, PgTransaction};
use diesel::prelude::*;

impl FacultyRepository for PgTransaction<'_> {
    fn find_all(&mut self) -> AppResult<Vec<Faculty>> {
        let rows = faculties::table
            .order(faculties::id.asc())
            .select(FacultyModel::as_select())
            .load(self.conn)?;
        Ok(rows.into_iter().map(Faculty::from).collect())
    }

    fn find_by_id(&mut self, id: i64) -> AppResult<Option<Faculty>> {
        let row = faculties::table
            .find(id)
            .select(FacultyModel::as_select())
            .first(self.conn)
            .optional()?;
        Ok(row.map(Faculty::from))
    }

    fn exists_by_id(&mut self, id: i64) -> AppResult<bool> {
        let exists = diesel::select(diesel::dsl::exists(faculties::table.find(id)))
            .get_result::<bool>(self.conn)?;
        Ok(exists)
    }

    fn find_by_name_ignore_case(&mut self, name: &str) -> AppResult<Option<Faculty>> {
        let row = faculties::table
            .filter(lower(faculties::name).eq(lower(name)))
            .select(FacultyModel::as_select())
            .first(self.conn)
            .optional()?;
        Ok(row.map(Faculty::from))
    }

    fn create(&mut self, faculty: &FacultyInput) -> AppResult<Faculty> {
        let inserted = diesel::insert_into(faculties::table)
            .values(&NewFacultyModel {
                name: &faculty.name,
            })
            .returning(FacultyModel::as_returning())
            .get_result(self.conn)?;
        Ok(inserted.into())
    }

    fn update(&mut self, faculty: &Faculty) -> AppResult<Faculty> {
        let updated = diesel::update(faculties::table.find(faculty.id))
            .set(faculties::name.eq(&faculty.name))
            .returning(FacultyModel::as_returning())
            .get_result(self.conn)?;
        Ok(updated.into())
    }

    fn delete(&mut self, id: i64) -> AppResult<()> {
        diesel::delete(faculties::table.find(id)).execute(self.conn)?;
        Ok(())
    }
}
