use crate::shared::domain::Revisable;
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faculty {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacultyInput {
    pub name: String,
}

impl FacultyInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn validate(&self) -> AppResult<()> {
        Validator::validate_name("Faculty name", &self.name)
    }
}

impl Revisable for Faculty {
    type Changes = FacultyInput;

    fn apply(&self, changes: &FacultyInput) -> Self {
        Faculty {
            id: self.id,
            name: changes.name.clone(),
        }
    }

    fn same_state(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
