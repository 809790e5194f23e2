/// Error-to-response mapping shared by every handler
pub mod error_handling;
