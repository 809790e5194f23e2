pub mod application;
pub mod drive;
pub mod slot;
pub mod student;
