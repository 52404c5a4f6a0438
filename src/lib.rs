pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod web;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ServerConfig;

pub use core::roster::InMemoryRoster;
pub use utils::error::{ActivityError, Result};
pub use web::{build_router, AppState};
