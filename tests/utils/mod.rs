// Each test binary compiles this module separately and uses only part of it.
#![allow(dead_code)]

pub mod factories;
pub mod helpers;
pub mod test_db;
