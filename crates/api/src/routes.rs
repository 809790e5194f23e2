pub mod drive;
pub mod health;
pub mod slot;
pub mod student;
