//! Infrastructure layer for platform concerns.
//!
//! Houses the utilities that depend on the host environment rather than on
//! the catalog domain. Currently that is path resolution for configuration
//! and log files.

pub mod paths;

pub use paths::{config_dir, config_file, data_dir};
