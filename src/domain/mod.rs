mod config;
mod course;
mod gpa;
mod grade;
mod result;
mod standing;
mod store;
mod student;

pub(crate) use config::Config;

pub(crate) use course::Course;
pub(crate) use grade::Grade;
pub(crate) use student::Student;

pub(crate) use store::Records;

pub(crate) use gpa::GpaCalculator;
pub(crate) use standing::{assessment, recommendations, Standing};
