/// Instructor bounded context
///
/// Instructors own the teaching association with courses; the course side is derived
/// from the same index.
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::service::InstructorService;
pub use domain::{
    entities::{Instructor, InstructorDetails, InstructorInput, NewInstructor},
    repository::InstructorRepository,
};
