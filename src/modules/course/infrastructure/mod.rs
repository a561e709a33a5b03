pub mod memory;
pub mod models;
pub mod repository;

pub use models::CourseModel;
