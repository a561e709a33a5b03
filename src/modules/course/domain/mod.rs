pub mod entities;
pub mod repository;

pub use entities::{Course, CourseDetails, CourseInput, CourseUpdate};
pub use repository::CourseRepository;
