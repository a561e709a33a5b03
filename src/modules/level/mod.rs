/// Level bounded context
///
/// An academic-year grouping inside a faculty; names are unique per faculty.
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::service::LevelService;
pub use domain::{
    entities::{Level, LevelInput, NewLevel},
    repository::LevelRepository,
};
