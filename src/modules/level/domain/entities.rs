use crate::shared::domain::Revisable;
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub id: i64,
    pub name: String,
    pub faculty_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelInput {
    pub name: String,
    #[serde(default)]
    pub faculty_id: Option<i64>,
}

impl LevelInput {
    pub fn new(name: impl Into<String>, faculty_id: Option<i64>) -> Self {
        Self {
            name: name.into(),
            faculty_id,
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        Validator::validate_name("Level name", &self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewLevel {
    pub name: String,
    pub faculty_id: i64,
}

impl Revisable for Level {
    type Changes = NewLevel;

    fn apply(&self, changes: &NewLevel) -> Self {
        Level {
            id: self.id,
            name: changes.name.clone(),
            faculty_id: changes.faculty_id,
        }
    }

    fn same_state(&self, other: &Self) -> bool {
        self.name == other.name && self.faculty_id == other.faculty_id
    }
}
