pub mod entities;
pub mod repository;

pub use entities::{Faculty, FacultyInput};
pub use repository::FacultyRepository;
