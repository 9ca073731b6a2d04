//! Pretty-printed JSON files written through a sibling temp file

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Serialize `value` with two-space indentation and replace `path` with it.
pub(crate) fn write_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> io::Result<()> {
    let mut content = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    content.push('\n');

    let temp = temp_path(path);
    std::fs::write(&temp, content)?;
    std::fs::rename(&temp, path)
}
