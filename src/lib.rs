pub mod modules;
mod schema;
pub mod shared;

use modules::{
    course::CourseService, department::DepartmentService, enrollment::EnrollmentService,
    faculty::FacultyService, instructor::InstructorService, level::LevelService,
    student::StudentService,
};
use shared::errors::AppResult;
use shared::infrastructure::{Database, PgUnitOfWork, UnitOfWork};
use shared::utils::init_logger;
use std::sync::Arc;

/// Every domain service, wired to one shared unit of work.
pub struct AcademicServices<U: UnitOfWork> {
    uow: Arc<U>,
    pub faculties: FacultyService<U>,
    pub departments: DepartmentService<U>,
    pub levels: LevelService<U>,
    pub courses: CourseService<U>,
    pub students: StudentService<U>,
    pub instructors: InstructorService<U>,
    pub enrollments: EnrollmentService<U>,
}

impl<U: UnitOfWork> AcademicServices<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self {
            faculties: FacultyService::new(Arc::clone(&uow)),
            departments: DepartmentService::new(Arc::clone(&uow)),
            levels: LevelService::new(Arc::clone(&uow)),
            courses: CourseService::new(Arc::clone(&uow)),
            students: StudentService::new(Arc::clone(&uow)),
            instructors: InstructorService::new(Arc::clone(&uow)),
            enrollments: EnrollmentService::new(Arc::clone(&uow)),
            uow,
        }
    }

    pub fn unit_of_work(&self) -> &Arc<U> {
        &self.uow
    }
}

/// Loads `.env`, starts logging, connects to Postgres and applies pending migrations.
pub fn bootstrap() -> AppResult<AcademicServices<PgUnitOfWork>> {
    // Load environment variables
    dotenvy::dotenv().ok();
    init_logger();

    let database = Arc::new(Database::new()?);
    database.run_migrations()?;

    log_info!("Academic services ready");
    Ok(AcademicServices::new(Arc::new(PgUnitOfWork::new(database))))
}
