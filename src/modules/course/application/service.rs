use super::super::domain::entities::{Course, CourseDetails, CourseInput, CourseUpdate};
use crate::log_info;
use crate::modules::integrity::{association, deletion_guard, lookup, DeletionTarget, Presence};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::{AcademicRepositories, UnitOfWork};
use crate::shared::utils::LogContext;
use std::sync::Arc;

pub struct CourseService<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CourseService<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    pub async fn list_courses(&self) -> AppResult<Vec<Course>> {
        self.uow
            .execute("list_courses", |repos| repos.courses().find_all())
            .await
    }

    /// Looks the course up by code, ignoring case.
    pub async fn get_course(&self, code: &str) -> AppResult<CourseDetails> {
        let code = code.to_string();
        self.uow
            .execute("get_course", move |repos| {
                let course = lookup::course(repos, &code)?;
                details(repos, course)
            })
            .await
    }

    pub async fn create_course(&self, input: CourseInput) -> AppResult<CourseDetails> {
        self.uow
            .execute("create_course", move |repos| create(repos, &input))
            .await
            .inspect_err(|e| LogContext::rejected("create_course", e))
    }

    /// Replaces the course's attributes; `instructor_ids` are attached, never removed.
    pub async fn update_course(
        &self,
        code: &str,
        changes: CourseUpdate,
    ) -> AppResult<CourseDetails> {
        let code = code.to_string();
        self.uow
            .execute("update_course", move |repos| update(repos, &code, &changes))
            .await
            .inspect_err(|e| LogContext::rejected("update_course", e))
    }

    pub async fn delete_course(&self, code: &str) -> AppResult<()> {
        let code = code.to_string();
        self.uow
            .execute("delete_course", move |repos| delete(repos, &code))
            .await
            .inspect_err(|e| LogContext::rejected("delete_course", e))
    }

    pub async fn list_by_department(&self, department_id: i64) -> AppResult<Vec<Course>> {
        self.uow
            .execute("list_courses_by_department", move |repos| {
                lookup::assert_department_exists(repos, department_id)?;
                repos.courses().find_all_by_department_id(department_id)
            })
            .await
    }

    pub async fn count_by_department(&self, department_id: i64) -> AppResult<i64> {
        self.uow
            .execute("count_courses_by_department", move |repos| {
                lookup::assert_department_exists(repos, department_id)?;
                repos.courses().count_by_department_id(department_id)
            })
            .await
    }

    pub async fn list_by_level(&self, level_id: i64) -> AppResult<Vec<Course>> {
        self.uow
            .execute("list_courses_by_level", move |repos| {
                lookup::assert_level_exists(repos, level_id)?;
                repos.courses().find_all_by_level_id(level_id)
            })
            .await
    }
}

fn details(repos: &mut dyn AcademicRepositories, course: Course) -> AppResult<CourseDetails> {
    let instructor_ids = repos.instructors().instructor_ids_of(&course.code)?;
    Ok(CourseDetails {
        course,
        instructor_ids,
    })
}

fn create(repos: &mut dyn AcademicRepositories, input: &CourseInput) -> AppResult<CourseDetails> {
    input.validate()?;
    lookup::assert_course_exists(repos, &input.code, Presence::MustNotExist)?;
    let department = lookup::required_department(repos, input.department_id, "Course")?;
    let level = lookup::required_level(repos, input.level_id, "Course")?;

    let course = repos.courses().create(&Course {
        code: input.code.clone(),
        name: input.name.clone(),
        credits: input.credits,
        level_id: level.id,
        department_id: department.id,
    })?;
    let instructor_ids =
        association::attach_instructors(repos, &course.code, &input.instructor_ids)?;

    log_info!(
        "Created course {} with {} instructor(s)",
        course.code,
        instructor_ids.len()
    );
    Ok(CourseDetails {
        course,
        instructor_ids,
    })
}

fn update(
    repos: &mut dyn AcademicRepositories,
    code: &str,
    changes: &CourseUpdate,
) -> AppResult<CourseDetails> {
    let current = lookup::course(repos, code)?;
    changes.validate()?;
    let department = lookup::required_department(repos, changes.department_id, "Course")?;
    let level = lookup::required_level(repos, changes.level_id, "Course")?;

    let course = repos.courses().update(&Course {
        code: current.code,
        name: changes.name.clone(),
        credits: changes.credits,
        level_id: level.id,
        department_id: department.id,
    })?;
    let instructor_ids =
        association::attach_instructors(repos, &course.code, &changes.instructor_ids)?;

    Ok(CourseDetails {
        course,
        instructor_ids,
    })
}

fn delete(repos: &mut dyn AcademicRepositories, code: &str) -> AppResult<()> {
    let course = lookup::course(repos, code)?;
    let target = DeletionTarget::Course(&course.code);
    deletion_guard::can_delete(repos, target)?;
    deletion_guard::detach_associations(repos, target)?;

    repos.courses().delete(&course.code)?;
    log_info!("Deleted course {}", course.code);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::integrity::testing::{
        sample_course, sample_department, sample_instructor, sample_level, MockRepositories,
    };
    use crate::shared::errors::ErrorCode;

    fn input(instructor_ids: Vec<i64>) -> CourseInput {
        CourseInput {
            code: "CS101".to_string(),
            name: "Algo".to_string(),
            credits: 3,
            level_id: Some(1),
            department_id: Some(1),
            instructor_ids,
        }
    }

    #[test]
    fn test_duplicate_code_is_conflict_before_parent_lookup() {
        let mut repos = MockRepositories::default();
        repos.courses.expect_exists_by_code().returning(|_| Ok(true));
        repos.departments.expect_find_by_id().never();
        repos.courses.expect_create().never();

        let err = create(&mut repos, &input(vec![])).unwrap_err();
        assert_eq!(err.code(), ErrorCode::CourseAlreadyExists);
    }

    #[test]
    fn test_missing_level_is_bad_request() {
        let mut repos = MockRepositories::default();
        repos.courses.expect_exists_by_code().returning(|_| Ok(false));
        repos
            .departments
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_department(id, 1))));
        repos.courses.expect_create().never();

        let mut request = input(vec![]);
        request.level_id = None;
        let err = create(&mut repos, &request).unwrap_err();
        assert_eq!(err.code(), ErrorCode::LevelNotProvided);
    }

    #[test]
    fn test_create_attaches_requested_instructors() {
        let mut repos = MockRepositories::default();
        repos.courses.expect_exists_by_code().returning(|_| Ok(false));
        repos
            .departments
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_department(id, 1))));
        repos
            .levels
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_level(id, 1))));
        repos
            .courses
            .expect_create()
            .times(1)
            .returning(|c| Ok(c.clone()));
        repos
            .instructors
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_instructor(id))));
        repos
            .instructors
            .expect_is_teaching()
            .returning(|_, _| Ok(false));
        repos
            .instructors
            .expect_attach()
            .withf(|id, code| *id == 4 && code == "CS101")
            .times(1)
            .returning(|_, _| Ok(()));
        repos
            .instructors
            .expect_instructor_ids_of()
            .returning(|_| Ok(vec![4]));

        let created = create(&mut repos, &input(vec![4])).unwrap();
        assert_eq!(created.course.code, "CS101");
        assert_eq!(created.instructor_ids, vec![4]);
    }

    #[test]
    fn test_delete_with_enrollments_keeps_teaching_pairs() {
        let mut repos = MockRepositories::default();
        repos
            .courses
            .expect_find_by_code()
            .returning(|_| Ok(Some(sample_course("CS101"))));
        repos
            .enrollments
            .expect_count_by_course_code()
            .returning(|_| Ok(2));
        repos.instructors.expect_detach_course().never();
        repos.courses.expect_delete().never();

        let err = delete(&mut repos, "cs101").unwrap_err();
        assert_eq!(err.code(), ErrorCode::CourseHasEnrollments);
    }

    #[test]
    fn test_delete_detaches_before_removing_course() {
        let mut repos = MockRepositories::default();
        let mut seq = mockall::Sequence::new();
        repos
            .courses
            .expect_find_by_code()
            .returning(|_| Ok(Some(sample_course("CS101"))));
        repos
            .enrollments
            .expect_count_by_course_code()
            .returning(|_| Ok(0));
        repos
            .instructors
            .expect_detach_course()
            .withf(|code| code == "CS101")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(1));
        repos
            .courses
            .expect_delete()
            .withf(|code| code == "CS101")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        delete(&mut repos, "cs101").unwrap();
    }

    #[test]
    fn test_update_keeps_stored_code() {
        let mut repos = MockRepositories::default();
        repos
            .courses
            .expect_find_by_code()
            .returning(|_| Ok(Some(sample_course("CS101"))));
        repos
            .departments
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_department(id, 1))));
        repos
            .levels
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_level(id, 1))));
        repos
            .courses
            .expect_update()
            .withf(|c| c.code == "CS101" && c.credits == 4)
            .times(1)
            .returning(|c| Ok(c.clone()));
        repos
            .instructors
            .expect_instructor_ids_of()
            .returning(|_| Ok(vec![]));

        let mut changes = CourseUpdate::from(input(vec![]));
        changes.credits = 4;
        let updated = update(&mut repos, "cs101", &changes).unwrap();
        assert_eq!(updated.course.code, "CS101");
    }

    #[test]
    fn test_update_of_missing_course_is_not_found_before_validation() {
        let mut repos = MockRepositories::default();
        repos.courses.expect_find_by_code().returning(|_| Ok(None));
        repos.departments.expect_find_by_id().never();
        repos.courses.expect_update().never();

        let mut changes = CourseUpdate::from(input(vec![]));
        changes.name = " ".to_string();
        let err = update(&mut repos, "NOPE1", &changes).unwrap_err();
        assert_eq!(err.code(), ErrorCode::CourseNotFound);
    }
}
