use super::super::domain::entities::{NewStudent, Student, StudentInput};
use crate::modules::integrity::{deletion_guard, lookup, DeletionTarget};
use crate::shared::domain::{revise, Revision};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::{AcademicRepositories, UnitOfWork};
use crate::shared::utils::LogContext;
use crate::{log_debug, log_info};
use std::sync::Arc;

pub struct StudentService<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> StudentService<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    pub async fn list_students(&self) -> AppResult<Vec<Student>> {
        self.uow
            .execute("list_students", |repos| repos.students().find_all())
            .await
    }

    pub async fn get_student(&self, id: i64) -> AppResult<Student> {
        self.uow
            .execute("get_student", move |repos| lookup::student(repos, id))
            .await
    }

    pub async fn create_student(&self, input: StudentInput) -> AppResult<Student> {
        self.uow
            .execute("create_student", move |repos| create(repos, &input, None))
            .await
            .inspect_err(|e| LogContext::rejected("create_student", e))
    }

    /// Creates the student record for an authentication identity.
    /// The identity itself is not checked; a second record for it is rejected by the store.
    pub async fn create_for_user(&self, input: StudentInput, user_id: i64) -> AppResult<Student> {
        self.uow
            .execute("create_student_for_user", move |repos| {
                create(repos, &input, Some(user_id))
            })
            .await
            .inspect_err(|e| LogContext::rejected("create_student_for_user", e))
    }

    pub async fn update_student(&self, id: i64, input: StudentInput) -> AppResult<Student> {
        self.uow
            .execute("update_student", move |repos| update(repos, id, &input))
            .await
            .inspect_err(|e| LogContext::rejected("update_student", e))
    }

    pub async fn delete_student(&self, id: i64) -> AppResult<()> {
        self.uow
            .execute("delete_student", move |repos| delete(repos, id))
            .await
            .inspect_err(|e| LogContext::rejected("delete_student", e))
    }

    /// Students whose department belongs to the faculty.
    pub async fn list_by_faculty(&self, faculty_id: i64) -> AppResult<Vec<Student>> {
        self.uow
            .execute("list_students_by_faculty", move |repos| {
                lookup::assert_faculty_exists(repos, faculty_id)?;
                repos.students().find_all_by_faculty_id(faculty_id)
            })
            .await
    }

    pub async fn count_by_faculty(&self, faculty_id: i64) -> AppResult<i64> {
        self.uow
            .execute("count_students_by_faculty", move |repos| {
                lookup::assert_faculty_exists(repos, faculty_id)?;
                repos.students().count_by_faculty_id(faculty_id)
            })
            .await
    }
}

fn resolve(
    repos: &mut dyn AcademicRepositories,
    input: &StudentInput,
    user_id: Option<i64>,
) -> AppResult<NewStudent> {
    input.validate()?;
    let level = lookup::required_level(repos, input.level_id, "Student")?;
    let department = lookup::optional_department(repos, input.department_id)?;
    Ok(NewStudent {
        person: input.person.clone(),
        level_id: level.id,
        department_id: department.map(|d| d.id),
        user_id,
    })
}

fn create(
    repos: &mut dyn AcademicRepositories,
    input: &StudentInput,
    user_id: Option<i64>,
) -> AppResult<Student> {
    let new_student = resolve(repos, input, user_id)?;

    let student = repos.students().create(&new_student)?;
    log_info!(
        "Created student {} ({}) in level {}",
        student.id,
        student.person.full_name(),
        student.level_id
    );
    Ok(student)
}

fn update(
    repos: &mut dyn AcademicRepositories,
    id: i64,
    input: &StudentInput,
) -> AppResult<Student> {
    let current = lookup::student(repos, id)?;
    let changes = resolve(repos, input, current.user_id)?;

    match revise(&current, &changes) {
        Revision::Unchanged(student) => {
            log_debug!("Student {} unchanged, skipping write", id);
            Ok(student)
        }
        Revision::Changed { next, .. } => repos.students().update(&next),
    }
}

fn delete(repos: &mut dyn AcademicRepositories, id: i64) -> AppResult<()> {
    lookup::assert_student_exists(repos, id)?;
    deletion_guard::can_delete(repos, DeletionTarget::Student(id))?;

    repos.students().delete(id)?;
    log_info!("Deleted student {}", id);
    Ok(())
}
