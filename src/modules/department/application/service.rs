use super::super::domain::entities::{Department, DepartmentInput, NewDepartment};
use crate::modules::integrity::{deletion_guard, lookup, uniqueness, DeletionTarget, NameScope};
use crate::shared::domain::{revise, Revision};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::{AcademicRepositories, UnitOfWork};
use crate::shared::utils::LogContext;
use crate::{log_debug, log_info};
use std::sync::Arc;

pub struct DepartmentService<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> DepartmentService<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    pub async fn list_departments(&self) -> AppResult<Vec<Department>> {
        self.uow
            .execute("list_departments", |repos| repos.departments().find_all())
            .await
    }

    pub async fn get_department(&self, id: i64) -> AppResult<Department> {
        self.uow
            .execute("get_department", move |repos| lookup::department(repos, id))
            .await
    }

    pub async fn create_department(&self, input: DepartmentInput) -> AppResult<Department> {
        self.uow
            .execute("create_department", move |repos| create(repos, &input))
            .await
            .inspect_err(|e| LogContext::rejected("create_department", e))
    }

    pub async fn update_department(
        &self,
        id: i64,
        input: DepartmentInput,
    ) -> AppResult<Department> {
        self.uow
            .execute("update_department", move |repos| update(repos, id, &input))
            .await
            .inspect_err(|e| LogContext::rejected("update_department", e))
    }

    pub async fn delete_department(&self, id: i64) -> AppResult<()> {
        self.uow
            .execute("delete_department", move |repos| delete(repos, id))
            .await
            .inspect_err(|e| LogContext::rejected("delete_department", e))
    }

    pub async fn list_by_faculty(&self, faculty_id: i64) -> AppResult<Vec<Department>> {
        self.uow
            .execute("list_departments_by_faculty", move |repos| {
                lookup::assert_faculty_exists(repos, faculty_id)?;
                repos.departments().find_all_by_faculty_id(faculty_id)
            })
            .await
    }

    pub async fn count_by_faculty(&self, faculty_id: i64) -> AppResult<i64> {
        self.uow
            .execute("count_departments_by_faculty", move |repos| {
                lookup::assert_faculty_exists(repos, faculty_id)?;
                repos.departments().count_by_faculty_id(faculty_id)
            })
            .await
    }
}

fn resolve(
    repos: &mut dyn AcademicRepositories,
    input: &DepartmentInput,
) -> AppResult<NewDepartment> {
    input.validate()?;
    let faculty = lookup::required_faculty(repos, input.faculty_id, "Department")?;
    Ok(NewDepartment {
        name: input.name.clone(),
        faculty_id: faculty.id,
    })
}

fn create(repos: &mut dyn AcademicRepositories, input: &DepartmentInput) -> AppResult<Department> {
    let new_department = resolve(repos, input)?;
    uniqueness::assert_name_unique(repos, &new_department.name, NameScope::Department, None)?;

    let department = repos.departments().create(&new_department)?;
    log_info!(
        "Created department {} '{}' in faculty {}",
        department.id,
        department.name,
        department.faculty_id
    );
    Ok(department)
}

fn update(
    repos: &mut dyn AcademicRepositories,
    id: i64,
    input: &DepartmentInput,
) -> AppResult<Department> {
    let current = lookup::department(repos, id)?;
    let changes = resolve(repos, input)?;

    match revise(&current, &changes) {
        Revision::Unchanged(department) => {
            log_debug!("Department {} unchanged, skipping write", id);
            Ok(department)
        }
        Revision::Changed { previous, next } => {
            uniqueness::assert_name_unique(repos, &next.name, NameScope::Department, Some(id))?;
            let department = repos.departments().update(&next)?;
            log_info!(
                "Updated department {} '{}' (faculty {}) -> '{}' (faculty {})",
                id,
                previous.name,
                previous.faculty_id,
                department.name,
                department.faculty_id
            );
            Ok(department)
        }
    }
}

fn delete(repos: &mut dyn AcademicRepositories, id: i64) -> AppResult<()> {
    lookup::assert_department_exists(repos, id)?;
    deletion_guard::can_delete(repos, DeletionTarget::Department(id))?;

    repos.departments().delete(id)?;
    log_info!("Deleted department {}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::integrity::testing::{sample_department, sample_faculty, MockRepositories};
    use crate::shared::errors::ErrorCode;

    #[test]
    fn test_missing_faculty_reference_is_bad_request() {
        let mut repos = MockRepositories::default();
        repos.departments.expect_create().never();

        let err = create(&mut repos, &DepartmentInput::new("CS", None)).unwrap_err();
        assert_eq!(err.status(), 400);
        assert_eq!(err.code(), ErrorCode::FacultyNotProvided);
    }

    #[test]
    fn test_unknown_faculty_is_not_found() {
        let mut repos = MockRepositories::default();
        repos.faculties.expect_find_by_id().returning(|_| Ok(None));
        repos.departments.expect_create().never();

        let err = create(&mut repos, &DepartmentInput::new("CS", Some(99))).unwrap_err();
        assert_eq!(err.code(), ErrorCode::FacultyNotFound);
    }

    #[test]
    fn test_create_persists_resolved_faculty() {
        let mut repos = MockRepositories::default();
        repos
            .faculties
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_faculty(id, "Engineering"))));
        repos
            .departments
            .expect_find_by_name_ignore_case()
            .returning(|_| Ok(None));
        repos
            .departments
            .expect_create()
            .withf(|d| d.name == "CS" && d.faculty_id == 1)
            .times(1)
            .returning(|d| {
                Ok(Department {
                    id: 1,
                    name: d.name.clone(),
                    faculty_id: d.faculty_id,
                })
            });

        let department = create(&mut repos, &DepartmentInput::new("CS", Some(1))).unwrap();
        assert_eq!(department.id, 1);
    }

    #[test]
    fn test_unchanged_update_skips_write() {
        let mut repos = MockRepositories::default();
        repos
            .departments
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_department(id, 1))));
        repos
            .faculties
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_faculty(id, "Engineering"))));
        repos.departments.expect_find_by_name_ignore_case().never();
        repos.departments.expect_update().never();

        let input = DepartmentInput::new("Department 4", Some(1));
        assert_eq!(update(&mut repos, 4, &input).unwrap(), sample_department(4, 1));
    }

    #[test]
    fn test_delete_with_students_never_deletes() {
        let mut repos = MockRepositories::default();
        repos.departments.expect_exists_by_id().returning(|_| Ok(true));
        repos
            .students
            .expect_count_by_department_id()
            .returning(|_| Ok(3));
        repos.departments.expect_delete().never();

        let err = delete(&mut repos, 1).unwrap_err();
        assert_eq!(err.code(), ErrorCode::DepartmentHasAssociations);
    }
}
