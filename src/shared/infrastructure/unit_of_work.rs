/// Transaction boundary for domain operations
///
/// Every public service operation runs one closure through `UnitOfWork::execute`.
/// The closure sees all repositories bound to the same transaction; returning `Err`
/// rolls everything back.
use crate::modules::course::CourseRepository;
use crate::modules::department::DepartmentRepository;
use crate::modules::enrollment::EnrollmentRepository;
use crate::modules::faculty::FacultyRepository;
use crate::modules::instructor::InstructorRepository;
use crate::modules::level::LevelRepository;
use crate::modules::student::StudentRepository;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Repositories scoped to one open transaction.
pub trait AcademicRepositories {
    fn faculties(&mut self) -> &mut dyn FacultyRepository;
    fn departments(&mut self) -> &mut dyn DepartmentRepository;
    fn levels(&mut self) -> &mut dyn LevelRepository;
    fn courses(&mut self) -> &mut dyn CourseRepository;
    fn students(&mut self) -> &mut dyn StudentRepository;
    fn instructors(&mut self) -> &mut dyn InstructorRepository;
    fn enrollments(&mut self) -> &mut dyn EnrollmentRepository;
}

#[async_trait]
pub trait UnitOfWork: Send + Sync + 'static {
    /// Runs `work` atomically: commit on `Ok`, roll back on `Err`.
    async fn execute<T, F>(&self, operation: &str, work: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut dyn AcademicRepositories) -> AppResult<T> + Send + 'static;
}
