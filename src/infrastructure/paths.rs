//! Filesystem locations for configuration and data.
//!
//! Resolves the XDG base directories with a `$HOME` fallback. The client
//! keeps no catalog data on disk; the data directory only holds the log
//! file, since stdout belongs to the UI.

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Tunedex.
///
/// `$XDG_CONFIG_HOME/tunedex`, falling back to `~/.config/tunedex`.
#[must_use]
pub fn config_dir() -> PathBuf {
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| home_dir().join(".config"))
        .join("tunedex")
}

/// Returns the data directory for Tunedex.
///
/// `$XDG_DATA_HOME/tunedex`, falling back to `~/.local/share/tunedex`.
/// The log file `tunedex.log` lives here.
#[must_use]
pub fn data_dir() -> PathBuf {
    env::var_os("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| home_dir().join(".local").join("share"))
        .join("tunedex")
}

/// Returns the default configuration file path.
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

fn home_dir() -> PathBuf {
    env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}
