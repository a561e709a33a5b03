/// Department bounded context
///
/// A department belongs to one faculty and owns students, courses and instructors.
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::service::DepartmentService;
pub use domain::{
    entities::{Department, DepartmentInput, NewDepartment},
    repository::DepartmentRepository,
};
