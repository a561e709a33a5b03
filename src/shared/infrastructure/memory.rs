/// In-process store with the same transactional and referential behaviour as the
/// Postgres schema
///
/// A unit of work clones the committed state, runs against the clone and swaps
/// it in only on success, so a failed operation leaves nothing behind. Units of
/// work are serialized by the mutex.
use super::unit_of_work::{AcademicRepositories, UnitOfWork};
use crate::modules::course::{Course, CourseRepository};
use crate::modules::department::{Department, DepartmentRepository};
use crate::modules::enrollment::{Enrollment, EnrollmentId, EnrollmentRepository};
use crate::modules::faculty::{Faculty, FacultyRepository};
use crate::modules::instructor::{Instructor, InstructorRepository};
use crate::modules::level::{Level, LevelRepository};
use crate::modules::student::{Student, StudentRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::TimedOperation;
use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};

const SLOW_TRANSACTION_MS: u64 = 50;

/// Per-table identity sequences, starting at 1 like BIGSERIAL.
#[derive(Debug, Clone, Default)]
pub(crate) struct Sequences {
    faculty: i64,
    department: i64,
    level: i64,
    student: i64,
    instructor: i64,
}

impl Sequences {
    pub(crate) fn next_faculty(&mut self) -> i64 {
        Self::bump(&mut self.faculty)
    }

    pub(crate) fn next_department(&mut self) -> i64 {
        Self::bump(&mut self.department)
    }

    pub(crate) fn next_level(&mut self) -> i64 {
        Self::bump(&mut self.level)
    }

    pub(crate) fn next_student(&mut self) -> i64 {
        Self::bump(&mut self.student)
    }

    pub(crate) fn next_instructor(&mut self) -> i64 {
        Self::bump(&mut self.instructor)
    }

    fn bump(value: &mut i64) -> i64 {
        *value += 1;
        *value
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryState {
    pub(crate) faculties: BTreeMap<i64, Faculty>,
    pub(crate) departments: BTreeMap<i64, Department>,
    pub(crate) levels: BTreeMap<i64, Level>,
    pub(crate) courses: BTreeMap<String, Course>,
    pub(crate) students: BTreeMap<i64, Student>,
    pub(crate) instructors: BTreeMap<i64, Instructor>,
    pub(crate) teaches: BTreeSet<(i64, String)>,
    pub(crate) enrollments: BTreeMap<EnrollmentId, Enrollment>,
    pub(crate) sequences: Sequences,
    pub(crate) writes: u64,
}

impl MemoryState {
    pub(crate) fn record_write(&mut self) {
        self.writes += 1;
    }

    /// Stored key of a course, matching `code` case-insensitively
    pub(crate) fn course_key(&self, code: &str) -> Option<String> {
        self.courses
            .keys()
            .find(|stored| same_text(stored, code))
            .cloned()
    }
}

/// Case-insensitive comparison matching SQL `LOWER(a) = LOWER(b)`
pub(crate) fn same_text(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Mirrors a RESTRICT foreign key refusing the delete
pub(crate) fn restrict(blocked: bool, message: impl FnOnce() -> String) -> AppResult<()> {
    if blocked {
        return Err(AppError::integrity_violation(message()));
    }
    Ok(())
}

/// Repositories bound to one in-memory transaction.
pub struct MemoryTransaction<'s> {
    pub(crate) state: &'s mut MemoryState,
}

impl AcademicRepositories for MemoryTransaction<'_> {
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

#[derive(Debug, Clone, Default)]
pub struct MemoryUnitOfWork {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryUnitOfWork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed writes so far (creates, updates, deletes, attach/detach)
    pub fn write_count(&self) -> u64 {
        match self.state.lock() {
            Ok(state) => state.writes,
            Err(poisoned) => poisoned.into_inner().writes,
        }
    }

    fn run<T, F>(&self, work: F) -> AppResult<T>
    where
        F: FnOnce(&mut dyn AcademicRepositories) -> AppResult<T>,
    {
        let mut committed = self
            .state
            .lock()
            .map_err(|_| AppError::internal("In-memory store lock poisoned"))?;

        let mut draft = committed.clone();
        let output = {
            let mut tx = MemoryTransaction { state: &mut draft };
            let repos: &mut dyn AcademicRepositories = &mut tx;
            work(repos)?
        };

        *committed = draft;
        Ok(output)
    }
}

#[async_trait]
impl UnitOfWork for MemoryUnitOfWork {
    async fn execute<T, F>(&self, operation: &str, work: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut dyn AcademicRepositories) -> AppResult<T> + Send + 'static,
    {
        let timer = TimedOperation::new(operation);
        let result = self.run(work);
        timer.finish_over(SLOW_TRANSACTION_MS, "memory");
        result
    }
}
