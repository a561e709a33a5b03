// Bounded contexts of the academic structure, plus the integrity engine they share

pub mod course;
pub mod department;
pub mod enrollment;
pub mod faculty;
pub mod instructor;
pub mod integrity;
pub mod level;
pub mod student;
