//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod config;
pub mod in_memory;
pub mod players;
pub mod ports;
