/// Student bounded context
///
/// A student sits in a level, optionally in a department, and may be linked to a user account.
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::service::StudentService;
pub use domain::{
    entities::{NewStudent, Student, StudentInput},
    repository::StudentRepository,
};
