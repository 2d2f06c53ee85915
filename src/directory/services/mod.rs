//! Application services for directory orchestration.

mod directory;

pub use directory::{DirectoryService, DirectoryServiceError, RegisterUserRequest};
