//! Terminal UI frontend for the party-versus-boss battle.
//!
//! The frontend is a thin layer over [`game_core::GameSession`]:
//! - keys are decoded into raw menu codes by [`input::InputHandler`]
//! - codes are fed to the session one at a time
//! - every frame renders the session snapshot plus local UI state
//!
//! It owns no game rules. Side views (help, self-check) and input errors are
//! UI state only and never touch the session.

mod app;
mod config;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};
