//! Response model, report rendering, and configuration for the promotions
//! integration sample.
//!
//! Nothing in this crate performs I/O beyond reading environment variables
//! in [`load_app_config`]. The [`model`] types are populated by
//! `promo-client` and turned into report text by the free functions in
//! [`render`].

pub mod app_config;
pub mod config;
pub mod error;
pub mod model;
pub mod render;

pub use app_config::{AppConfig, Credentials, KeyWarning, ServiceTarget};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, ModelError};
