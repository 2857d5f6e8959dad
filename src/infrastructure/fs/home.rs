//! Home directory resolution with test isolation support.
//!
//! On Windows, `dirs::home_dir()` uses the Windows system API rather than
//! environment variables, so setting `HOME` in tests has no effect there.
//! `decorator_home_dir()` checks `AVRO_DECORATOR_HOME` first and only then
//! falls back to `dirs::home_dir()`.

use std::path::PathBuf;

/// Environment variable overriding the home directory.
pub const DECORATOR_HOME_VAR: &str = "AVRO_DECORATOR_HOME";

/// Environment variable overriding the endpoint file location outright.
pub const PROPERTIES_PATH_VAR: &str = "AVRO_DECORATOR_PROPERTIES";

/// File name of the endpoint file inside the home directory.
pub const PROPERTIES_FILE_NAME: &str = ".kafka-avro-decorator.properties";

/// Get the home directory used for the endpoint file.
///
/// # Returns
///
/// - `Some(PathBuf)` - The home directory path
/// - `None` - If neither `AVRO_DECORATOR_HOME` is set nor system home can be resolved
pub fn decorator_home_dir() -> Option<PathBuf> {
    std::env::var(DECORATOR_HOME_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// Default location of the endpoint file: `~/.kafka-avro-decorator.properties`.
pub fn default_properties_path() -> PathBuf {
    if let Ok(path) = std::env::var(PROPERTIES_PATH_VAR) {
        return PathBuf::from(path);
    }
    decorator_home_dir()
        .map(|home| home.join(PROPERTIES_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(PROPERTIES_FILE_NAME))
}
