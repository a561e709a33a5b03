pub mod entities;
pub mod repository;

pub use entities::{NewStudent, Student, StudentInput};
pub use repository::StudentRepository;
