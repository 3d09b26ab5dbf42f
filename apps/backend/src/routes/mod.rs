pub mod admin;
pub mod grading;
pub mod limits;
pub mod vocab;
