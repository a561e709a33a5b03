/// Diesel-based implementation of DepartmentRepository
use super::models::{DepartmentModel, NewDepartmentModel};
use crate::modules::department::domain::{
    entities::{Department, NewDepartment},
    repository::DepartmentRepository,
};
use crate::schema::departments;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::postgres::{lower, PgTransaction};
use diesel::prelude::*;

impl DepartmentRepository for PgTransaction<'_> {
    fn find_all(&mut self) -> AppResult<Vec<Department>> {
        let rows = departments::table
            .order(departments::id.asc())
            .select(DepartmentModel::as_select())
            .load(self.conn)?;
        Ok(rows.into_iter().map(Department::from).collect())
    }

    fn find_by_id(&mut self, id: i64) -> AppResult<Option<Department>> {
        let row = departments::table
            .find(id)
            .select(DepartmentModel::as_select())
            .first(self.conn)
            .optional()?;
        Ok(row.map(Department::from))
    }

    fn exists_by_id(&mut self, id: i64) -> AppResult<bool> {
        let exists = diesel::select(diesel::dsl::exists(departments::table.find(id)))
            .get_result::<bool>(self.conn)?;
        Ok(exists)
    }

    fn find_by_name_ignore_case(&mut self, name: &str) -> AppResult<Option<Department>> {
        let row = departments::table
            .filter(lower(departments::name).eq(lower(name)))
            .select(DepartmentModel::as_select())
            .first(self.conn)
            .optional()?;
        Ok(row.map(Department::from))
    }

    fn find_all_by_faculty_id(&mut self, faculty_id: i64) -> AppResult<Vec<Department>> {
        let rows = departments::table
            .filter(departments::faculty_id.eq(faculty_id))
            .order(departments::id.asc())
            .select(DepartmentModel::as_select())
            .load(self.conn)?;
        Ok(rows.into_iter().map(Department::from).collect())
    }

    fn count_by_faculty_id(&mut self, faculty_id: i64) -> AppResult<i64> {
        let count = departments::table
            .filter(departments::faculty_id.eq(faculty_id))
            .count()
            .get_result::<i64>(self.conn)?;
        Ok(count)
    }

    fn create(&mut self, department: &NewDepartment) -> AppResult<Department> {
        let inserted = diesel::insert_into(departments::table)
            .values(&NewDepartmentModel::from(department))
            .returning(DepartmentModel::as_returning())
            .get_result(self.conn)?;
        Ok(inserted.into())
    }

    fn update(&mut self, department: &Department) -> AppResult<Department> {
        let changes = NewDepartmentModel {
            name: &department.name,
            faculty_id: department.faculty_id,
        };
        let updated = diesel::update(departments::table.find(department.id))
            .set(&changes)
            .returning(DepartmentModel::as_returning())
            .get_result(self.conn)?;
        Ok(updated.into())
    }

    fn delete(&mut self, id: i64) -> AppResult<()> {
        diesel::delete(departments::table.find(id)).execute(self.conn)?;
        Ok(())
    }
}
