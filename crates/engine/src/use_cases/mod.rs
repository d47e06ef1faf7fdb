//! Use cases - User story orchestration.
//!
//! Use cases coordinate domain rules with the storage ports.

pub mod management;

pub use management::{ManagementError, ManagementUseCases, PlayerManagement};
