use crate::shared::domain::{Person, Revisable};
use crate::shared::errors::AppResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    #[serde(flatten)]
    pub person: Person,
    pub level_id: i64,
    pub department_id: Option<i64>,
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentInput {
    #[serde(flatten)]
    pub person: Person,
    #[serde(default)]
    pub level_id: Option<i64>,
    #[serde(default)]
    pub department_id: Option<i64>,
}

impl StudentInput {
    pub fn validate(&self) -> AppResult<()> {
        self.person.validate()
    }
}

/// Student state with its level (and department, if any) resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudent {
    pub person: Person,
    pub level_id: i64,
    pub department_id: Option<i64>,
    pub user_id: Option<i64>,
}

impl Revisable for Student {
    type Changes = NewStudent;

    /// The user link is set once at creation and survives updates.
    fn apply(&self, changes: &NewStudent) -> Self {
        Student {
            id: self.id,
            person: changes.person.clone(),
            level_id: changes.level_id,
            department_id: changes.department_id,
            user_id: self.user_id,
        }
    }

    fn same_state(&self, other: &Self) -> bool {
        self.person.same_as(&other.person)
            && self.level_id == other.level_id
            && self.department_id == other.department_id
    }
}
