use crate::shared::domain::Revisable;
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub faculty_id: i64,
}

/// Change request as received from callers; the faculty may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentInput {
    pub name: String,
    #[serde(default)]
    pub faculty_id: Option<i64>,
}

impl DepartmentInput {
    pub fn new(name: impl Into<String>, faculty_id: Option<i64>) -> Self {
        Self {
            name: name.into(),
            faculty_id,
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        Validator::validate_name("Department name", &self.name)
    }
}

/// Department state with its faculty resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDepartment {
    pub name: String,
    pub faculty_id: i64,
}

impl Revisable for Department {
    type Changes = NewDepartment;

    fn apply(&self, changes: &NewDepartment) -> Self {
        Department {
            id: self.id,
            name: changes.name.clone(),
            faculty_id: changes.faculty_id,
        }
    }

    fn same_state(&self, other: &Self) -> bool {
        self.name == other.name && self.faculty_id == other.faculty_id
    }
}
