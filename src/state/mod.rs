//! State management module for the station front-end
//!
//! This module contains the application state types organized by concern:
//! - `app_state`: Root application state container
//! - `resources`: Content sections and the remote resources that load them

mod app_state;
mod resources;

pub use app_state::*;
pub use resources::*;
