pub mod entities;
pub mod repository;

pub use entities::{Instructor, InstructorDetails, InstructorInput, NewInstructor};
pub use repository::InstructorRepository;
