use crate::shared::domain::Person;
use crate::shared::errors::AppResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    pub id: i64,
    #[serde(flatten)]
    pub person: Person,
    pub department_id: i64,
    pub user_id: Option<i64>,
}

/// Instructor with the codes of the courses it teaches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructorDetails {
    #[serde(flatten)]
    pub instructor: Instructor,
    pub course_codes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructorInput {
    #[serde(flatten)]
    pub person: Person,
    #[serde(default)]
    pub department_id: Option<i64>,
    #[serde(default)]
    pub course_codes: Vec<String>,
}

impl InstructorInput {
    pub fn validate(&self) -> AppResult<()> {
        self.person.validate()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewInstructor {
    pub person: Person,
    pub department_id: i64,
    pub user_id: Option<i64>,
}

impl Instructor {
    /// Replaces the mutable attributes; identity and user link are kept.
    pub fn with_changes(&self, changes: &NewInstructor) -> Instructor {
        Instructor {
            id: self.id,
            person: changes.person.clone(),
            department_id: changes.department_id,
            user_id: self.user_id,
        }
    }
}
