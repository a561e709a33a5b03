use super::super::domain::entities::{
    Enrollment, EnrollmentDraft, EnrollmentId, EnrollmentInput, GradeInput,
};
use crate::modules::integrity::{lookup, Presence};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::{AcademicRepositories, UnitOfWork};
use crate::shared::utils::LogContext;
use crate::{log_debug, log_info};
use std::sync::Arc;

pub struct EnrollmentService<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> EnrollmentService<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    pub async fn list_enrollments(&self) -> AppResult<Vec<Enrollment>> {
        self.uow
            .execute("list_enrollments", |repos| repos.enrollments().find_all())
            .await
    }

    pub async fn get_enrollment(
        &self,
        student_id: i64,
        course_code: &str,
    ) -> AppResult<Enrollment> {
        let course_code = course_code.to_string();
        self.uow
            .execute("get_enrollment", move |repos| {
                let id = pair_id(repos, student_id, &course_code)?;
                lookup::enrollment(repos, &id)
            })
            .await
    }

    pub async fn create_enrollment(&self, input: EnrollmentInput) -> AppResult<Enrollment> {
        self.uow
            .execute("create_enrollment", move |repos| create(repos, &input))
            .await
            .inspect_err(|e| LogContext::rejected("create_enrollment", e))
    }

    /// Sets a new grade on an existing enrollment.
    pub async fn update_enrollment(
        &self,
        student_id: i64,
        course_code: &str,
        input: GradeInput,
    ) -> AppResult<Enrollment> {
        let course_code = course_code.to_string();
        self.uow
            .execute("update_enrollment", move |repos| {
                update(repos, student_id, &course_code, input)
            })
            .await
            .inspect_err(|e| LogContext::rejected("update_enrollment", e))
    }

    pub async fn delete_enrollment(&self, student_id: i64, course_code: &str) -> AppResult<()> {
        let course_code = course_code.to_string();
        self.uow
            .execute("delete_enrollment", move |repos| {
                delete(repos, student_id, &course_code)
            })
            .await
            .inspect_err(|e| LogContext::rejected("delete_enrollment", e))
    }

    pub async fn list_by_student(&self, student_id: i64) -> AppResult<Vec<Enrollment>> {
        self.uow
            .execute("list_enrollments_by_student", move |repos| {
                lookup::assert_student_exists(repos, student_id)?;
                repos.enrollments().find_all_by_student_id(student_id)
            })
            .await
    }

    pub async fn list_by_course(&self, course_code: &str) -> AppResult<Vec<Enrollment>> {
        let course_code = course_code.to_string();
        self.uow
            .execute("list_enrollments_by_course", move |repos| {
                let course = lookup::course(repos, &course_code)?;
                repos.enrollments().find_all_by_course_code(&course.code)
            })
            .await
    }
}

/// Asserts the student, then resolves the course to its stored code.
fn pair_id(
    repos: &mut dyn AcademicRepositories,
    student_id: i64,
    course_code: &str,
) -> AppResult<EnrollmentId> {
    lookup::assert_student_exists(repos, student_id)?;
    let course = lookup::course(repos, course_code)?;
    Ok(EnrollmentId::new(student_id, course.code))
}

/// Resolves both sides; the draft carries the course's stored code.
fn draft(
    repos: &mut dyn AcademicRepositories,
    student_id: i64,
    course_code: &str,
    grade: Option<f64>,
) -> AppResult<EnrollmentDraft> {
    let student = lookup::student(repos, student_id)?;
    let course = lookup::course(repos, course_code)?;
    Ok(EnrollmentDraft::new(student, course, grade))
}

fn create(repos: &mut dyn AcademicRepositories, input: &EnrollmentInput) -> AppResult<Enrollment> {
    let draft = draft(repos, input.student_id, &input.course_code, input.grade)?;
    let id = EnrollmentId::new(draft.student.id, draft.course.code.clone());
    lookup::assert_enrollment_exists(repos, &id, Presence::MustNotExist)?;

    let enrollment = repos.enrollments().create(&draft.into_enrollment()?)?;
    log_info!("Enrolled {} with grade {}", id, enrollment.grade);
    Ok(enrollment)
}

fn update(
    repos: &mut dyn AcademicRepositories,
    student_id: i64,
    course_code: &str,
    input: GradeInput,
) -> AppResult<Enrollment> {
    let draft = draft(repos, student_id, course_code, input.grade)?;
    let id = EnrollmentId::new(draft.student.id, draft.course.code.clone());
    lookup::assert_enrollment_exists(repos, &id, Presence::MustExist)?;

    let enrollment = repos.enrollments().update(&draft.into_enrollment()?)?;
    log_debug!("Regraded {} to {}", id, enrollment.grade);
    Ok(enrollment)
}

fn delete(
    repos: &mut dyn AcademicRepositories,
    student_id: i64,
    course_code: &str,
) -> AppResult<()> {
    let id = pair_id(repos, student_id, course_code)?;
    lookup::assert_enrollment_exists(repos, &id, Presence::MustExist)?;

    repos.enrollments().delete(&id)?;
    log_info!("Deleted enrollment for {}", id);
    Ok(())
}
