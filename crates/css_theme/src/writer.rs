//! Stylesheet output.

use std::fs;
use std::path::Path;

use crate::error::{ThemeError, ThemeResult};

/// Writes `css` to `path`, creating missing parent directories.
pub fn write_stylesheet(path: &Path, css: &str) -> ThemeResult<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| {
            ThemeError::io(format!("failed to create output directory: {err}")).with_path(parent)
        })?;
    }
    fs::write(path, css).map_err(|err| {
        ThemeError::io(format!("failed to write stylesheet: {err}")).with_path(path)
    })?;
    tracing::debug!(path = %path.display(), bytes = css.len(), "wrote theme stylesheet");
    Ok(())
}
