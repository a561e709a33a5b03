/// Test data factories using builder pattern
///
/// Provides change requests with sensible defaults
use chrono::NaiveDate;
use university_lib::modules::{
    course::CourseInput, enrollment::EnrollmentInput, instructor::InstructorInput,
    student::StudentInput,
};
use university_lib::shared::domain::Person;

pub fn person(first_name: &str) -> Person {
    Person {
        first_name: first_name.to_string(),
        last_name: "Tester".to_string(),
        phone_number: "01012345678".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(2001, 1, 15).expect("valid date"),
        gender: None,
    }
}

pub struct CourseFactory {
    input: CourseInput,
}

impl CourseFactory {
    pub fn new(code: &str) -> Self {
        Self {
            input: CourseInput {
                code: code.to_string(),
                name: "Algo".to_string(),
                credits: 3,
                level_id: None,
                department_id: None,
                instructor_ids: Vec::new(),
            },
        }
    }

    pub fn in_structure(mut self, department_id: i64, level_id: i64) -> Self {
        self.input.department_id = Some(department_id);
        self.input.level_id = Some(level_id);
        self
    }

    pub fn credits(mut self, credits: i32) -> Self {
        self.input.credits = credits;
        self
    }

    pub fn taught_by(mut self, instructor_ids: &[i64]) -> Self {
        self.input.instructor_ids = instructor_ids.to_vec();
        self
    }

    pub fn build(self) -> CourseInput {
        self.input
    }
}

pub struct StudentFactory {
    input: StudentInput,
}

impl StudentFactory {
    pub fn new(first_name: &str) -> Self {
        Self {
            input: StudentInput {
                person: person(first_name),
                level_id: None,
                department_id: None,
            },
        }
    }

    pub fn level(mut self, level_id: i64) -> Self {
        self.input.level_id = Some(level_id);
        self
    }

    pub fn department(mut self, department_id: i64) -> Self {
        self.input.department_id = Some(department_id);
        self
    }

    pub fn build(self) -> StudentInput {
        self.input
    }
}

pub struct InstructorFactory {
    input: InstructorInput,
}

impl InstructorFactory {
    pub fn new(first_name: &str) -> Self {
        Self {
            input: InstructorInput {
                person: person(first_name),
                department_id: None,
                course_codes: Vec::new(),
            },
        }
    }

    pub fn department(mut self, department_id: i64) -> Self {
        self.input.department_id = Some(department_id);
        self
    }

    pub fn teaching(mut self, codes: &[&str]) -> Self {
        self.input.course_codes = codes.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn build(self) -> InstructorInput {
        self.input
    }
}

pub fn enrollment(student_id: i64, course_code: &str, grade: Option<f64>) -> EnrollmentInput {
    EnrollmentInput {
        student_id,
        course_code: course_code.to_string(),
        grade,
    }
}
