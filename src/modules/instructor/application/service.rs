use super::super::domain::entities::{Instructor, InstructorDetails, InstructorInput, NewInstructor};
use crate::log_info;
use crate::modules::integrity::{association, deletion_guard, lookup, DeletionTarget};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::{AcademicRepositories, UnitOfWork};
use crate::shared::utils::LogContext;
use std::sync::Arc;

pub struct InstructorService<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> InstructorService<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    pub async fn list_instructors(&self) -> AppResult<Vec<Instructor>> {
        self.uow
            .execute("list_instructors", |repos| repos.instructors().find_all())
            .await
    }

    pub async fn get_instructor(&self, id: i64) -> AppResult<InstructorDetails> {
        self.uow
            .execute("get_instructor", move |repos| {
                let instructor = lookup::instructor(repos, id)?;
                let course_codes = repos.instructors().course_codes_of(id)?;
                Ok(InstructorDetails {
                    instructor,
                    course_codes,
                })
            })
            .await
    }

    pub async fn create_instructor(&self, input: InstructorInput) -> AppResult<InstructorDetails> {
        self.uow
            .execute("create_instructor", move |repos| create(repos, &input, None))
            .await
            .inspect_err(|e| LogContext::rejected("create_instructor", e))
    }

    pub async fn create_for_user(
        &self,
        input: InstructorInput,
        user_id: i64,
    ) -> AppResult<InstructorDetails> {
        self.uow
            .execute("create_instructor_for_user", move |repos| {
                create(repos, &input, Some(user_id))
            })
            .await
            .inspect_err(|e| LogContext::rejected("create_instructor_for_user", e))
    }

    /// Replaces the instructor's attributes; `course_codes` are attached, never removed.
    pub async fn update_instructor(
        &self,
        id: i64,
        input: InstructorInput,
    ) -> AppResult<InstructorDetails> {
        self.uow
            .execute("update_instructor", move |repos| update(repos, id, &input))
            .await
            .inspect_err(|e| LogContext::rejected("update_instructor", e))
    }

    pub async fn delete_instructor(&self, id: i64) -> AppResult<()> {
        self.uow
            .execute("delete_instructor", move |repos| delete(repos, id))
            .await
            .inspect_err(|e| LogContext::rejected("delete_instructor", e))
    }

    pub async fn list_by_department(&self, department_id: i64) -> AppResult<Vec<Instructor>> {
        self.uow
            .execute("list_instructors_by_department", move |repos| {
                lookup::assert_department_exists(repos, department_id)?;
                repos.instructors().find_all_by_department_id(department_id)
            })
            .await
    }
}

fn resolve(
    repos: &mut dyn AcademicRepositories,
    input: &InstructorInput,
    user_id: Option<i64>,
) -> AppResult<NewInstructor> {
    input.validate()?;
    let department = lookup::required_department(repos, input.department_id, "Instructor")?;
    Ok(NewInstructor {
        person: input.person.clone(),
        department_id: department.id,
        user_id,
    })
}

fn create(
    repos: &mut dyn AcademicRepositories,
    input: &InstructorInput,
    user_id: Option<i64>,
) -> AppResult<InstructorDetails> {
    let new_instructor = resolve(repos, input, user_id)?;

    let instructor = repos.instructors().create(&new_instructor)?;
    let course_codes = association::attach_courses(repos, instructor.id, &input.course_codes)?;

    log_info!(
        "Created instructor {} ({}) teaching {} course(s)",
        instructor.id,
        instructor.person.full_name(),
        course_codes.len()
    );
    Ok(InstructorDetails {
        instructor,
        course_codes,
    })
}

fn update(
    repos: &mut dyn AcademicRepositories,
    id: i64,
    input: &InstructorInput,
) -> AppResult<InstructorDetails> {
    let current = lookup::instructor(repos, id)?;
    let changes = resolve(repos, input, current.user_id)?;

    let instructor = repos.instructors().update(&current.with_changes(&changes))?;
    let course_codes = association::attach_courses(repos, instructor.id, &input.course_codes)?;

    Ok(InstructorDetails {
        instructor,
        course_codes,
    })
}

fn delete(repos: &mut dyn AcademicRepositories, id: i64) -> AppResult<()> {
    lookup::instructor(repos, id)?;
    let target = DeletionTarget::Instructor(id);
    deletion_guard::can_delete(repos, target)?;
    let detached = deletion_guard::detach_associations(repos, target)?;

    repos.instructors().delete(id)?;
    log_info!("Deleted instructor {} ({} course link(s) removed)", id, detached);
    Ok(())
}
