//! Roster engine library.
//!
//! Server-side code for the player roster service.
//!
//! ## Structure
//!
//! - `use_cases/` - Player management orchestration
//! - `infrastructure/` - Storage ports, adapters and configuration
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
