//! Writing the configuration file and telling the operator what to do next.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use tracing::{info, instrument};

use crate::{Result, SetupError, config::DisplayConfig};

const NEXT_STEPS: &str = "\
Next steps:
1. Upload filesystem: make upload-fs
2. Build and upload firmware: make build upload
   Or use: make upload-all";

/// Writes `config` to `path` as 2-space indented JSON.
///
/// Creates missing parent directories. An existing file is overwritten
/// in place. Serialization happens before any filesystem access.
///
/// # Errors
/// Returns `SetupError::IoError` if the directory or file cannot be written.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn write_config(config: &DisplayConfig, path: &Path) -> Result<()> {
    let json = config.to_json_pretty()?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SetupError::io_at(e, parent))?;
    }

    fs::write(path, json).map_err(|e| SetupError::io_at(e, path))?;

    info!("Configuration written");
    Ok(())
}

/// Writes the configuration, then prints where it went, the follow-up
/// build steps, and the configuration itself on `out`.
///
/// Returns the path written.
///
/// # Errors
/// Returns error if writing the file or the summary fails.
pub fn persist<W: Write>(config: &DisplayConfig, path: &Path, out: &mut W) -> Result<PathBuf> {
    write_config(config, path)?;

    writeln!(out, "Configuration saved to {}", path.display())?;
    writeln!(out)?;
    writeln!(out, "{NEXT_STEPS}")?;
    writeln!(out)?;
    writeln!(out, "Your configuration:")?;
    writeln!(out, "{}", config.to_json_pretty()?)?;
    out.flush()?;

    Ok(path.to_path_buf())
}
