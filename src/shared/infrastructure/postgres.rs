/// Diesel-backed unit of work
///
/// Each `execute` call checks a connection out of the r2d2 pool on the blocking
/// thread pool and runs the work inside one READ COMMITTED transaction.
use super::database::Database;
use super::unit_of_work::{AcademicRepositories, UnitOfWork};
use crate::modules::course::CourseRepository;
use crate::modules::department::DepartmentRepository;
use crate::modules::enrollment::EnrollmentRepository;
use crate::modules::faculty::FacultyRepository;
use crate::modules::instructor::InstructorRepository;
use crate::modules::level::LevelRepository;
use crate::modules::student::StudentRepository;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::TimedOperation;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use std::sync::Arc;
use tokio::task;

const SLOW_TRANSACTION_MS: u64 = 250;

diesel::define_sql_function! {
    /// SQL `LOWER(text)`, used for case-insensitive name and code matching
    fn lower(x: diesel::sql_types::Text) -> diesel::sql_types::Text;
}

/// Repositories bound to one open Postgres transaction.
pub struct PgTransaction<'c> {
    pub(crate) conn: &'c mut PgConnection,
}

impl<'c> PgTransaction<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }
}

impl AcademicRepositories for PgTransaction<'_> {
    fn faculties(&mut self) -> &mut dyn FacultyRepository {
        self
    }

    fn departments(&mut self) -> &mut dyn DepartmentRepository {
        self
    }

    fn levels(&mut self) -> &mut dyn LevelRepository {
        self
    }

    fn courses(&mut self) -> &mut dyn CourseRepository {
        self
    }

    fn students(&mut self) -> &mut dyn StudentRepository {
        self
    }

    fn instructors(&mut self) -> &mut dyn InstructorRepository {
        self
    }

    fn enrollments(&mut self) -> &mut dyn EnrollmentRepository {
        self
    }
}

pub struct PgUnitOfWork {
    db: Arc<Database>,
}

impl PgUnitOfWork {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Arc<Database> {
        &self.db
    }
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    async fn execute<T, F>(&self, operation: &str, work: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut dyn AcademicRepositories) -> AppResult<T> + Send + 'static,
    {
        let db = Arc::clone(&self.db);
        let timer = TimedOperation::new(operation);

        let result = task::spawn_blocking(move || -> AppResult<T> {
            let mut conn = db.get_connection()?;
            conn.build_transaction()
                .read_committed()
                .run::<T, AppError, _>(|conn| {
                    let mut tx = PgTransaction::new(conn);
                    let repos: &mut dyn AcademicRepositories = &mut tx;
                    work(repos)
                })
        })
        .await?;

        timer.finish_over(SLOW_TRANSACTION_MS, "postgres");
        result
    }
}
