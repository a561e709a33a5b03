//! Attach-only maintenance of the instructor/course teaching association.
//!
//! Every referenced member is resolved before anything is written, so an unknown
//! id or code leaves the association untouched. Pairs already present are
//! skipped; the association is never shrunk from here.

use super::lookup;
use crate::log_debug;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::AcademicRepositories;

/// Links the instructor to every course in `course_codes`.
///
/// Returns the instructor's full course list afterwards, in stored spelling.
pub fn attach_courses(
    repos: &mut dyn AcademicRepositories,
    instructor_id: i64,
    course_codes: &[String],
) -> AppResult<Vec<String>> {
    let mut resolved = Vec::with_capacity(course_codes.len());
    for code in course_codes {
        resolved.push(lookup::course(repos, code)?.code);
    }

    let mut attached = 0;
    for code in &resolved {
        if !repos.instructors().is_teaching(instructor_id, code)? {
            repos.instructors().attach(instructor_id, code)?;
            attached += 1;
        }
    }
    if attached > 0 {
        log_debug!(
            "Attached {} course(s) to instructor {}",
            attached,
            instructor_id
        );
    }

    repos.instructors().course_codes_of(instructor_id)
}

/// Links every instructor in `instructor_ids` to the course.
///
/// Returns the ids of all instructors teaching the course afterwards.
pub fn attach_instructors(
    repos: &mut dyn AcademicRepositories,
    course_code: &str,
    instructor_ids: &[i64],
) -> AppResult<Vec<i64>> {
    for id in instructor_ids {
        lookup::instructor(repos, *id)?;
    }

    let mut attached = 0;
    for id in instructor_ids {
        if !repos.instructors().is_teaching(*id, course_code)? {
            repos.instructors().attach(*id, course_code)?;
            attached += 1;
        }
    }
    if attached > 0 {
        log_debug!(
            "Attached {} instructor(s) to course {}",
            attached,
            course_code
        );
    }

    repos.instructors().instructor_ids_of(course_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::integrity::testing::{sample_course, sample_instructor, MockRepositories};
    use crate::shared::errors::ErrorCode;

    #[test]
    fn test_unknown_course_aborts_before_any_attach() {
        let mut repos = MockRepositories::default();
        repos.courses.expect_find_by_code().returning(|code| {
            if code == "CS101" {
                Ok(Some(sample_course("CS101")))
            } else {
                Ok(None)
            }
        });
        repos.instructors.expect_attach().never();

        let codes = vec!["CS101".to_string(), "NOPE".to_string()];
        let err = attach_courses(&mut repos, 1, &codes).unwrap_err();
        assert_eq!(err.code(), ErrorCode::CourseNotFound);
    }

    #[test]
    fn test_existing_pairs_are_not_attached_again() {
        let mut repos = MockRepositories::default();
        repos
            .courses
            .expect_find_by_code()
            .returning(|code| Ok(Some(sample_course(&code.to_uppercase()))));
        repos
            .instructors
            .expect_is_teaching()
            .returning(|_, code| Ok(code == "CS101"));
        repos
            .instructors
            .expect_attach()
            .withf(|id, code| *id == 1 && code == "MATH1")
            .times(1)
            .returning(|_, _| Ok(()));
        repos
            .instructors
            .expect_course_codes_of()
            .returning(|_| Ok(vec!["CS101".to_string(), "MATH1".to_string()]));

        let codes = vec!["cs101".to_string(), "math1".to_string()];
        let all = attach_courses(&mut repos, 1, &codes).unwrap();
        assert_eq!(all, vec!["CS101", "MATH1"]);
    }

    #[test]
    fn test_unknown_instructor_aborts_before_any_attach() {
        let mut repos = MockRepositories::default();
        repos.instructors.expect_find_by_id().returning(|id| {
            if id == 1 {
                Ok(Some(sample_instructor(1)))
            } else {
                Ok(None)
            }
        });
        repos.instructors.expect_attach().never();

        let err = attach_instructors(&mut repos, "CS101", &[1, 2]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InstructorNotFound);
        assert_eq!(err.to_string(), "Instructor with id 2 not found");
    }

    #[test]
    fn test_empty_request_only_reads_current_list() {
        let mut repos = MockRepositories::default();
        repos.instructors.expect_attach().never();
        repos
            .instructors
            .expect_instructor_ids_of()
            .returning(|_| Ok(vec![4, 7]));

        assert_eq!(attach_instructors(&mut repos, "CS101", &[]).unwrap(), vec![4, 7]);
    }
}
