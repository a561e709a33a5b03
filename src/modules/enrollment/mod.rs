/// Enrollment bounded context
///
/// An enrollment is identified by the (student, course) pair and carries a grade.
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::service::EnrollmentService;
pub use domain::{
    entities::{Enrollment, EnrollmentDraft, EnrollmentId, EnrollmentInput, GradeInput},
    repository::EnrollmentRepository,
};
