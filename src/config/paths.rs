use std::path::{Path, PathBuf};

/// Utility struct for locating the files this tool reads and writes.
///
/// All paths are relative to the current working directory, which is
/// expected to be the firmware project root.
pub struct ConfigPaths;

impl ConfigPaths {
    /// Directory the firmware's filesystem image is built from.
    pub const DATA_DIR: &'static str = "data";

    /// File name the firmware loads its configuration from.
    pub const CONFIG_FILE: &'static str = "config.json";

    /// Returns the default output path, `data/config.json`.
    pub fn default_output() -> PathBuf {
        Path::new(Self::DATA_DIR).join(Self::CONFIG_FILE)
    }
}
