/// Course bounded context
///
/// Courses are keyed by their caller-supplied code and sit under a level and a department.
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::service::CourseService;
pub use domain::{
    entities::{Course, CourseDetails, CourseInput, CourseUpdate},
    repository::CourseRepository,
};
