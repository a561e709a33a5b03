use super::super::domain::entities::{Faculty, FacultyInput};
use crate::modules::integrity::{deletion_guard, lookup, uniqueness, DeletionTarget, NameScope};
use crate::shared::domain::{revise, Revision};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::{AcademicRepositories, UnitOfWork};
use crate::shared::utils::LogContext;
use crate::{log_debug, log_info};
use std::sync::Arc;

pub struct FacultyService<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> FacultyService<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    pub async fn list_faculties(&self) -> AppResult<Vec<Faculty>> {
        self.uow
            .execute("list_faculties", |repos| repos.faculties().find_all())
            .await
    }

    pub async fn get_faculty(&self, id: i64) -> AppResult<Faculty> {
        self.uow
            .execute("get_faculty", move |repos| lookup::faculty(repos, id))
            .await
    }

    pub async fn create_faculty(&self, input: FacultyInput) -> AppResult<Faculty> {
        self.uow
            .execute("create_faculty", move |repos| create(repos, &input))
            .await
            .inspect_err(|e| LogContext::rejected("create_faculty", e))
    }

    pub async fn update_faculty(&self, id: i64, input: FacultyInput) -> AppResult<Faculty> {
        self.uow
            .execute("update_faculty", move |repos| update(repos, id, &input))
            .await
            .inspect_err(|e| LogContext::rejected("update_faculty", e))
    }

    pub async fn delete_faculty(&self, id: i64) -> AppResult<()> {
        self.uow
            .execute("delete_faculty", move |repos| delete(repos, id))
            .await
            .inspect_err(|e| LogContext::rejected("delete_faculty", e))
    }

    /// Number of departments in the faculty; the faculty must exist.
    pub async fn count_departments(&self, id: i64) -> AppResult<i64> {
        self.uow
            .execute("count_faculty_departments", move |repos| {
                lookup::assert_faculty_exists(repos, id)?;
                repos.departments().count_by_faculty_id(id)
            })
            .await
    }

    /// Number of students whose department belongs to the faculty.
    pub async fn count_students(&self, id: i64) -> AppResult<i64> {
        self.uow
            .execute("count_faculty_students", move |repos| {
                lookup::assert_faculty_exists(repos, id)?;
                repos.students().count_by_faculty_id(id)
            })
            .await
    }
}

fn create(repos: &mut dyn AcademicRepositories, input: &FacultyInput) -> AppResult<Faculty> {
    input.validate()?;
    uniqueness::assert_name_unique(repos, &input.name, NameScope::Faculty, None)?;

    let faculty = repos.faculties().create(input)?;
    log_info!("Created faculty {} '{}'", faculty.id, faculty.name);
    Ok(faculty)
}

fn update(
    repos: &mut dyn AcademicRepositories,
    id: i64,
    input: &FacultyInput,
) -> AppResult<Faculty> {
    let current = lookup::faculty(repos, id)?;
    input.validate()?;

    match revise(&current, input) {
        Revision::Unchanged(faculty) => {
            log_debug!("Faculty {} unchanged, skipping write", id);
            Ok(faculty)
        }
        Revision::Changed { previous, next } => {
            uniqueness::assert_name_unique(repos, &next.name, NameScope::Faculty, Some(id))?;
            let faculty = repos.faculties().update(&next)?;
            log_info!("Renamed faculty {} '{}' -> '{}'", id, previous.name, faculty.name);
            Ok(faculty)
        }
    }
}

fn delete(repos: &mut dyn AcademicRepositories, id: i64) -> AppResult<()> {
    lookup::assert_faculty_exists(repos, id)?;
    deletion_guard::can_delete(repos, DeletionTarget::Faculty(id))?;

    repos.faculties().delete(id)?;
    log_info!("Deleted faculty {}", id);
    Ok(())
}
