pub mod entities;
pub mod repository;

pub use entities::{Level, LevelInput, NewLevel};
pub use repository::LevelRepository;
