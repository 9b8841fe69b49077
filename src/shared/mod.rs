/// Shared kernel - error types, exit codes and file security checks
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
