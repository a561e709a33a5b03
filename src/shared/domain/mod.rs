pub mod person;
pub mod revision;

pub use person::Person;
pub use revision::{revise, Revisable, Revision};
