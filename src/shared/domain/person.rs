use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Personal attributes shared by students and instructors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub date_of_birth: NaiveDate,
    #[serde(default)]
    pub gender: Option<String>,
}

impl Person {
    pub fn validate(&self) -> AppResult<()> {
        Validator::validate_name("First name", &self.first_name)?;
        Validator::validate_name("Last name", &self.last_name)?;
        Validator::validate_name("Phone number", &self.phone_number)?;
        Ok(())
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Field-by-field comparison used by update short-circuits.
    pub fn same_as(&self, other: &Person) -> bool {
        self.first_name == other.first_name
            && self.last_name == other.last_name
            && self.phone_number == other.phone_number
            && self.date_of_birth == other.date_of_birth
            && self.gender == other.gender
    }
}
