use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub code: String,
    pub name: String,
    pub credits: i32,
    pub level_id: i64,
    pub department_id: i64,
}

/// Course with the instructors currently teaching it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseDetails {
    #[serde(flatten)]
    pub course: Course,
    pub instructor_ids: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseInput {
    pub code: String,
    pub name: String,
    pub credits: i32,
    #[serde(default)]
    pub level_id: Option<i64>,
    #[serde(default)]
    pub department_id: Option<i64>,
    #[serde(default)]
    pub instructor_ids: Vec<i64>,
}

impl CourseInput {
    pub fn validate(&self) -> AppResult<()> {
        Validator::validate_course_code(&self.code)?;
        validate_fields(&self.name, self.credits)
    }
}

/// Update request; the code comes from the addressed course and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseUpdate {
    pub name: String,
    pub credits: i32,
    #[serde(default)]
    pub level_id: Option<i64>,
    #[serde(default)]
    pub department_id: Option<i64>,
    #[serde(default)]
    pub instructor_ids: Vec<i64>,
}

impl CourseUpdate {
    pub fn validate(&self) -> AppResult<()> {
        validate_fields(&self.name, self.credits)
    }
}

impl From<CourseInput> for CourseUpdate {
    fn from(input: CourseInput) -> Self {
        Self {
            name: input.name,
            credits: input.credits,
            level_id: input.level_id,
            department_id: input.department_id,
            instructor_ids: input.instructor_ids,
        }
    }
}

fn validate_fields(name: &str, credits: i32) -> AppResult<()> {
    Validator::validate_name("Course name", name)?;
    if credits < 0 {
        return Err(AppError::validation("Credits cannot be negative"));
    }
    Ok(())
}
