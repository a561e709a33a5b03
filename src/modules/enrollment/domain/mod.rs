pub mod entities;
pub mod repository;

pub use entities::{Enrollment, EnrollmentDraft, EnrollmentId, EnrollmentInput, GradeInput};
pub use repository::EnrollmentRepository;
