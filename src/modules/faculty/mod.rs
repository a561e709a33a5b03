/// Faculty bounded context
///
/// Top of the ownership tree: a faculty owns departments and levels.
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::service::FacultyService;
pub use domain::{
    entities::{Faculty, FacultyInput},
    repository::FacultyRepository,
};
