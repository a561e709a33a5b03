use crate::modules::course::Course;
use crate::modules::student::Student;
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub student_id: i64,
    pub course_code: String,
    pub grade: f64,
}

impl Enrollment {
    pub fn id(&self) -> EnrollmentId {
        EnrollmentId::new(self.student_id, self.course_code.clone())
    }
}

/// Composite identity; there is no surrogate key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnrollmentId {
    pub student_id: i64,
    pub course_code: String,
}

impl EnrollmentId {
    pub fn new(student_id: i64, course_code: impl Into<String>) -> Self {
        Self {
            student_id,
            course_code: course_code.into(),
        }
    }
}

impl fmt::Display for EnrollmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "student_id {} and course_code {}",
            self.student_id, self.course_code
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentInput {
    pub student_id: i64,
    pub course_code: String,
    #[serde(default)]
    pub grade: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeInput {
    #[serde(default)]
    pub grade: Option<f64>,
}

/// Enrollment with both sides resolved, waiting for its grade to be checked.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrollmentDraft {
    pub student: Student,
    pub course: Course,
    pub grade: Option<f64>,
}

impl EnrollmentDraft {
    pub fn new(student: Student, course: Course, grade: Option<f64>) -> Self {
        Self {
            student,
            course,
            grade,
        }
    }

    /// Fails with `GRADE_NOT_SET` or `INVALID_GRADE`.
    pub fn into_enrollment(self) -> AppResult<Enrollment> {
        let grade = Validator::validate_grade(self.grade)?;
        Ok(Enrollment {
            student_id: self.student.id,
            course_code: self.course.code,
            grade,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::domain::Person;
    use crate::shared::errors::ErrorCode;
    use chrono::NaiveDate;

    fn draft(grade: Option<f64>) -> EnrollmentDraft {
        let student = Student {
            id: 5,
            person: Person {
                first_name: "Mona".to_string(),
                last_name: "Adel".to_string(),
                phone_number: "0100".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(2003, 5, 1).unwrap(),
                gender: None,
            },
            level_id: 1,
            department_id: Some(1),
            user_id: None,
        };
        let course = Course {
            code: "CS101".to_string(),
            name: "Algo".to_string(),
            credits: 3,
            level_id: 1,
            department_id: 1,
        };
        EnrollmentDraft::new(student, course, grade)
    }

    #[test]
    fn test_draft_takes_keys_from_resolved_sides() {
        let enrollment = draft(Some(88.5)).into_enrollment().unwrap();
        assert_eq!(enrollment.id(), EnrollmentId::new(5, "CS101"));
        assert_eq!(enrollment.grade, 88.5);
    }

    #[test]
    fn test_draft_rejects_missing_and_out_of_range_grades() {
        assert_eq!(
            draft(None).into_enrollment().unwrap_err().code(),
            ErrorCode::GradeNotSet
        );
        assert_eq!(
            draft(Some(150.0)).into_enrollment().unwrap_err().code(),
            ErrorCode::InvalidGrade
        );
    }

    #[test]
    fn test_id_display() {
        assert_eq!(
            EnrollmentId::new(5, "CS101").to_string(),
            "student_id 5 and course_code CS101"
        );
    }
}
