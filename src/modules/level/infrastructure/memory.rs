use crate::modules::level::domain::{
    entities::{Level, NewLevel},
    repository::LevelRepository,
};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::memory::{restrict, same_text, MemoryTransaction};

impl LevelRepository for MemoryTransaction<'_> {
    fn find_all(&mut self) -> AppResult<Vec<Level>> {
        Ok(self.state.levels.values().cloned().collect())
    }

    fn find_by_id(&mut self, id: i64) -> AppResult<Option<Level>> {
        Ok(self.state.levels.get(&id).cloned())
    }

    fn exists_by_id(&mut self, id: i64) -> AppResult<bool> {
        Ok(self.state.levels.contains_key(&id))
    }

    fn find_by_name_in_faculty(
        &mut self,
        name: &str,
        faculty_id: i64,
    ) -> AppResult<Option<Level>> {
        Ok(self
            .state
            .levels
            .values()
            .find(|l| l.faculty_id == faculty_id && same_text(&l.name, name))
            .cloned())
    }

    fn find_all_by_faculty_id(&mut self, faculty_id: i64) -> AppResult<Vec<Level>> {
        Ok(self
            .state
            .levels
            .values()
            .filter(|l| l.faculty_id == faculty_id)
            .cloned()
            .collect())
    }

    fn create(&mut self, level: &NewLevel) -> AppResult<Level> {
        let id = self.state.sequences.next_level();
        let created = Level {
            id,
            name: level.name.clone(),
            faculty_id: level.faculty_id,
        };
        self.state.levels.insert(id, created.clone());
        self.state.record_write();
        Ok(created)
    }

    fn update(&mut self, level: &Level) -> AppResult<Level> {
        self.state.levels.insert(level.id, level.clone());
        self.state.record_write();
        Ok(level.clone())
    }

    fn delete(&mut self, id: i64) -> AppResult<()> {
        let state = &mut *self.state;
        restrict(
            state.courses.values().any(|c| c.level_id == id)
                || state.students.values().any(|s| s.level_id == id),
            || format!("Level {} is still referenced by courses or students", id),
        )?;
        state.levels.remove(&id);
        state.record_write();
        Ok(())
    }
}
