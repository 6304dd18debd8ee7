//! # formgen-core
//!
//! Foundation types shared by the formgen crates. This crate has no
//! dependency on the rest of the workspace.
//!
//! ## Modules
//!
//! - [`error`] - Error type and result alias
//! - [`settings`] - Rendering and logging configuration
//! - [`settings_loader`] - Loading settings from TOML, JSON, and the environment
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;

pub use error::{FormgenError, FormgenResult};
pub use settings::{LayoutSettings, LayoutStyle, Settings};
