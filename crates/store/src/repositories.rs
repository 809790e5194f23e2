pub mod application;
pub mod drive;
pub mod offer;
pub mod slot;
pub mod student;
