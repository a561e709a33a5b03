/// Service builders and a seeded academic structure for integration tests
use university_lib::modules::{
    department::{Department, DepartmentInput},
    faculty::{Faculty, FacultyInput},
    level::{Level, LevelInput},
};
use university_lib::shared::infrastructure::{MemoryUnitOfWork, UnitOfWork};
use university_lib::AcademicServices;
use std::sync::Arc;

/// Services over a fresh in-memory store
pub fn build_test_services() -> AcademicServices<MemoryUnitOfWork> {
    AcademicServices::new(Arc::new(MemoryUnitOfWork::new()))
}

/// One faculty with one department and one level
pub struct Structure {
    pub faculty: Faculty,
    pub department: Department,
    pub level: Level,
}

pub async fn seed_structure<U: UnitOfWork>(services: &AcademicServices<U>) -> Structure {
    let faculty = services
        .faculties
        .create_faculty(FacultyInput::new("Engineering"))
        .await
        .expect("faculty should be created");
    let department = services
        .departments
        .create_department(DepartmentInput::new("CS", Some(faculty.id)))
        .await
        .expect("department should be created");
    let level = services
        .levels
        .create_level(LevelInput::new("L1", Some(faculty.id)))
        .await
        .expect("level should be created");

    Structure {
        faculty,
        department,
        level,
    }
}
