pub mod entities;
pub mod repository;

pub use entities::{Department, DepartmentInput, NewDepartment};
pub use repository::DepartmentRepository;
