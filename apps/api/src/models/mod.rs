pub mod case_study;
pub mod portfolio;
pub mod resume;
pub mod user;
