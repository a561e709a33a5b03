use regex::Regex;
use std::sync::OnceLock;

use crate::shared::errors::{AppError, ErrorCode};

pub const MIN_GRADE: f64 = 0.0;
pub const MAX_GRADE: f64 = 100.0;

const MAX_NAME_LEN: usize = 255;
const MAX_CODE_LEN: usize = 50;

fn course_code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_\-]*$").expect("course code pattern is valid")
    })
}

pub struct Validator;

impl Validator {
    /// Non-blank, bounded text field. `field` names the attribute in the message.
    pub fn validate_name(field: &str, value: &str) -> Result<(), AppError> {
        if value.trim().is_empty() {
            return Err(AppError::validation(format!("{} cannot be empty", field)));
        }
        if value.chars().count() > MAX_NAME_LEN {
            return Err(AppError::validation(format!(
                "{} too long (max {} characters)",
                field, MAX_NAME_LEN
            )));
        }
        Ok(())
    }

    pub fn validate_course_code(code: &str) -> Result<(), AppError> {
        if code.is_empty() {
            return Err(AppError::validation("Course code cannot be empty"));
        }
        if code.len() > MAX_CODE_LEN {
            return Err(AppError::validation(format!(
                "Course code too long (max {} characters)",
                MAX_CODE_LEN
            )));
        }
        if !course_code_pattern().is_match(code) {
            return Err(AppError::validation(format!(
                "Course code '{}' contains invalid characters",
                code
            )));
        }
        Ok(())
    }

    /// A grade must be present and lie in `[MIN_GRADE, MAX_GRADE]`.
    pub fn validate_grade(grade: Option<f64>) -> Result<f64, AppError> {
        let grade = grade.ok_or_else(|| {
            AppError::bad_request(ErrorCode::GradeNotSet, "Grade must be set for an enrollment")
        })?;
        if !(MIN_GRADE..=MAX_GRADE).contains(&grade) {
            return Err(AppError::bad_request(
                ErrorCode::InvalidGrade,
                format!(
                    "Grade {} is Invalid, grade must be between 0.00 and 100.00",
                    grade
                ),
            ));
        }
        Ok(grade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(Validator::validate_name("Faculty name", "Engineering").is_ok());
        assert!(Validator::validate_name("Faculty name", "   ").is_err());
        assert!(Validator::validate_name("Faculty name", &"x".repeat(256)).is_err());
    }

    #[test]
    fn test_validate_course_code() {
        assert!(Validator::validate_course_code("CS101").is_ok());
        assert!(Validator::validate_course_code("MATH-2_A").is_ok());
        assert!(Validator::validate_course_code("").is_err());
        assert!(Validator::validate_course_code("CS 101").is_err());
        assert!(Validator::validate_course_code("-CS").is_err());
    }

    #[test]
    fn test_validate_grade_bounds() {
        assert_eq!(Validator::validate_grade(Some(0.0)).unwrap(), 0.0);
        assert_eq!(Validator::validate_grade(Some(100.0)).unwrap(), 100.0);

        let err = Validator::validate_grade(Some(150.0)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidGrade);
        assert_eq!(err.status(), 400);

        let err = Validator::validate_grade(Some(-0.5)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidGrade);
    }

    #[test]
    fn test_missing_grade_is_bad_request() {
        let err = Validator::validate_grade(None).unwrap_err();
        assert_eq!(err.code(), ErrorCode::GradeNotSet);
        assert_eq!(err.status(), 400);
    }

    #[test]
    fn test_nan_grade_is_rejected() {
        let err = Validator::validate_grade(Some(f64::NAN)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidGrade);
    }
}
