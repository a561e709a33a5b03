use super::super::domain::entities::{Level, LevelInput, NewLevel};
use crate::modules::integrity::{deletion_guard, lookup, uniqueness, DeletionTarget, NameScope};
use crate::shared::domain::{revise, Revision};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::{AcademicRepositories, UnitOfWork};
use crate::shared::utils::LogContext;
use crate::{log_debug, log_info};
use std::sync::Arc;

pub struct LevelService<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> LevelService<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    pub async fn list_levels(&self) -> AppResult<Vec<Level>> {
        self.uow
            .execute("list_levels", |repos| repos.levels().find_all())
            .await
    }

    pub async fn get_level(&self, id: i64) -> AppResult<Level> {
        self.uow
            .execute("get_level", move |repos| lookup::level(repos, id))
            .await
    }

    pub async fn create_level(&self, input: LevelInput) -> AppResult<Level> {
        self.uow
            .execute("create_level", move |repos| create(repos, &input))
            .await
            .inspect_err(|e| LogContext::rejected("create_level", e))
    }

    pub async fn update_level(&self, id: i64, input: LevelInput) -> AppResult<Level> {
        self.uow
            .execute("update_level", move |repos| update(repos, id, &input))
            .await
            .inspect_err(|e| LogContext::rejected("update_level", e))
    }

    pub async fn delete_level(&self, id: i64) -> AppResult<()> {
        self.uow
            .execute("delete_level", move |repos| delete(repos, id))
            .await
            .inspect_err(|e| LogContext::rejected("delete_level", e))
    }

    pub async fn list_by_faculty(&self, faculty_id: i64) -> AppResult<Vec<Level>> {
        self.uow
            .execute("list_levels_by_faculty", move |repos| {
                lookup::assert_faculty_exists(repos, faculty_id)?;
                repos.levels().find_all_by_faculty_id(faculty_id)
            })
            .await
    }
}

fn resolve(repos: &mut dyn AcademicRepositories, input: &LevelInput) -> AppResult<NewLevel> {
    input.validate()?;
    let faculty = lookup::required_faculty(repos, input.faculty_id, "Level")?;
    Ok(NewLevel {
        name: input.name.clone(),
        faculty_id: faculty.id,
    })
}

fn create(repos: &mut dyn AcademicRepositories, input: &LevelInput) -> AppResult<Level> {
    let new_level = resolve(repos, input)?;
    let scope = NameScope::Level {
        faculty_id: new_level.faculty_id,
    };
    uniqueness::assert_name_unique(repos, &new_level.name, scope, None)?;

    let level = repos.levels().create(&new_level)?;
    log_info!(
        "Created level {} '{}' in faculty {}",
        level.id,
        level.name,
        level.faculty_id
    );
    Ok(level)
}

fn update(repos: &mut dyn AcademicRepositories, id: i64, input: &LevelInput) -> AppResult<Level> {
    let current = lookup::level(repos, id)?;
    let changes = resolve(repos, input)?;

    match revise(&current, &changes) {
        Revision::Unchanged(level) => {
            log_debug!("Level {} unchanged, skipping write", id);
            Ok(level)
        }
        Revision::Changed { previous, next } => {
            // Checked against the faculty the level ends up in.
            let scope = NameScope::Level {
                faculty_id: next.faculty_id,
            };
            uniqueness::assert_name_unique(repos, &next.name, scope, Some(id))?;
            let level = repos.levels().update(&next)?;
            if previous.faculty_id != level.faculty_id {
                log_info!(
                    "Moved level {} from faculty {} to {}",
                    id,
                    previous.faculty_id,
                    level.faculty_id
                );
            }
            Ok(level)
        }
    }
}

fn delete(repos: &mut dyn AcademicRepositories, id: i64) -> AppResult<()> {
    lookup::assert_level_exists(repos, id)?;
    deletion_guard::can_delete(repos, DeletionTarget::Level(id))?;

    repos.levels().delete(id)?;
    log_info!("Deleted level {}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::integrity::testing::{sample_faculty, sample_level, MockRepositories};
    use crate::shared::errors::ErrorCode;

    fn with_faculties(repos: &mut MockRepositories) {
        repos
            .faculties
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_faculty(id, "Faculty"))));
    }

    #[test]
    fn test_unchanged_update_skips_uniqueness_and_write() {
        let mut repos = MockRepositories::default();
        with_faculties(&mut repos);
        repos
            .levels
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_level(id, 1))));
        repos.levels.expect_find_by_name_in_faculty().never();
        repos.levels.expect_update().never();

        let level = update(&mut repos, 2, &LevelInput::new("Level 2", Some(1))).unwrap();
        assert_eq!(level, sample_level(2, 1));
    }

    #[test]
    fn test_moving_level_checks_target_faculty() {
        let mut repos = MockRepositories::default();
        with_faculties(&mut repos);
        repos
            .levels
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_level(id, 1))));
        repos
            .levels
            .expect_find_by_name_in_faculty()
            .withf(|_, faculty_id| *faculty_id == 2)
            .returning(|_, _| Ok(Some(sample_level(7, 2))));
        repos.levels.expect_update().never();

        let err = update(&mut repos, 2, &LevelInput::new("Level 7", Some(2))).unwrap_err();
        assert_eq!(err.code(), ErrorCode::LevelAlreadyExists);
    }

    #[test]
    fn test_same_name_in_another_faculty_is_allowed() {
        let mut repos = MockRepositories::default();
        with_faculties(&mut repos);
        repos
            .levels
            .expect_find_by_name_in_faculty()
            .returning(|_, _| Ok(None));
        repos.levels.expect_create().times(1).returning(|l| {
            Ok(Level {
                id: 3,
                name: l.name.clone(),
                faculty_id: l.faculty_id,
            })
        });

        let level = create(&mut repos, &LevelInput::new("Freshman", Some(2))).unwrap();
        assert_eq!(level.faculty_id, 2);
    }

    #[test]
    fn test_delete_with_students_is_conflict() {
        let mut repos = MockRepositories::default();
        repos.levels.expect_exists_by_id().returning(|_| Ok(true));
        repos.students.expect_count_by_level_id().returning(|_| Ok(1));
        repos.levels.expect_delete().never();

        let err = delete(&mut repos, 1).unwrap_err();
        assert_eq!(err.code(), ErrorCode::LevelDeleteConflict);
    }
}
