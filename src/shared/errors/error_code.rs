use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable machine-readable codes carried by every `AppError`.
///
/// Codes are part of the wire contract: callers match on them, so variants
/// may be added but never renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    FacultyNotFound,
    FacultyAlreadyExists,
    FacultyNotProvided,
    FacultyHasDepartments,

    DepartmentNotFound,
    DepartmentAlreadyExists,
    DepartmentNotProvided,
    DepartmentHasAssociations,

    LevelNotFound,
    LevelAlreadyExists,
    LevelNotProvided,
    LevelDeleteConflict,

    CourseNotFound,
    CourseAlreadyExists,
    CourseHasEnrollments,

    StudentNotFound,
    StudentHasEnrollments,

    InstructorNotFound,

    EnrollmentNotFound,
    EnrollmentAlreadyExists,
    GradeNotSet,
    InvalidGrade,

    ValidationError,
    DataIntegrityViolation,
    AuthenticationFailed,
    AccessDenied,
    GenericError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::FacultyNotFound => "FACULTY_NOT_FOUND",
            ErrorCode::FacultyAlreadyExists => "FACULTY_ALREADY_EXISTS",
            ErrorCode::FacultyNotProvided => "FACULTY_NOT_PROVIDED",
            ErrorCode::FacultyHasDepartments => "FACULTY_HAS_DEPARTMENTS",
            ErrorCode::DepartmentNotFound => "DEPARTMENT_NOT_FOUND",
            ErrorCode::DepartmentAlreadyExists => "DEPARTMENT_ALREADY_EXISTS",
            ErrorCode::DepartmentNotProvided => "DEPARTMENT_NOT_PROVIDED",
            ErrorCode::DepartmentHasAssociations => "DEPARTMENT_HAS_ASSOCIATIONS",
            ErrorCode::LevelNotFound => "LEVEL_NOT_FOUND",
            ErrorCode::LevelAlreadyExists => "LEVEL_ALREADY_EXISTS",
            ErrorCode::LevelNotProvided => "LEVEL_NOT_PROVIDED",
            ErrorCode::LevelDeleteConflict => "LEVEL_DELETE_CONFLICT",
            ErrorCode::CourseNotFound => "COURSE_NOT_FOUND",
            ErrorCode::CourseAlreadyExists => "COURSE_ALREADY_EXISTS",
            ErrorCode::CourseHasEnrollments => "COURSE_HAS_ENROLLMENTS",
            ErrorCode::StudentNotFound => "STUDENT_NOT_FOUND",
            ErrorCode::StudentHasEnrollments => "STUDENT_HAS_ENROLLMENTS",
            ErrorCode::InstructorNotFound => "INSTRUCTOR_NOT_FOUND",
            ErrorCode::EnrollmentNotFound => "ENROLLMENT_NOT_FOUND",
            ErrorCode::EnrollmentAlreadyExists => "ENROLLMENT_ALREADY_EXISTS",
            ErrorCode::GradeNotSet => "GRADE_NOT_SET",
            ErrorCode::InvalidGrade => "INVALID_GRADE",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::DataIntegrityViolation => "DATA_INTEGRITY_VIOLATION",
            ErrorCode::AuthenticationFailed => "AUTHENTICATION_FAILED",
            ErrorCode::AccessDenied => "ACCESS_DENIED",
            ErrorCode::GenericError => "GENERIC_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
