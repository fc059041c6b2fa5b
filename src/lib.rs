//! Front-end core for the 4K6AG amateur radio station site
//!
//! - `i18n`: locale store and translation tables
//! - `resource`: remote data resources with loading/error state
//! - `api`: backend client and wire types
//! - `contact`: contact and QSL request submission
//! - `state`: application context and per-section resources
//! - `ui`: plain-text section views

pub mod api;
pub mod config;
pub mod contact;
pub mod error;
pub mod i18n;
pub mod resource;
pub mod state;
pub mod ui;
