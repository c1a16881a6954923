//! Filesystem utilities for atomic writes.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Write `contents` to `destination` through a sibling temp file and a rename.
///
/// The parent directory is created if needed. Readers never observe a
/// half-written destination.
pub fn write_atomic(destination: &Path, contents: &[u8]) -> io::Result<()> {
    let parent = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)?;

    let temp_path = parent.join(temp_name(destination));
    let write_result = fs::File::create(&temp_path).and_then(|mut file| {
        file.write_all(contents)?;
        file.sync_all()
    });
    if let Err(err) = write_result {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    rename_with_fallback(&temp_path, destination)
}

fn temp_name(destination: &Path) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let stem = destination
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "shelf".to_string());
    format!(".{}.{}.{}.tmp", stem, std::process::id(), nanos)
}

/// Move `from` over `to`.
///
/// Some platforms refuse to rename onto an existing file; then `to` is
/// removed and the rename retried. `from` is deleted if the retry fails too.
pub fn rename_with_fallback(from: &Path, to: &Path) -> io::Result<()> {
    let first = match fs::rename(from, to) {
        Ok(()) => return Ok(()),
        Err(err) => err,
    };

    let _ = fs::remove_file(to);
    fs::rename(from, to).map_err(|second| {
        let _ = fs::remove_file(from);
        io::Error::new(
            second.kind(),
            format!(
                "Could not replace {} (first attempt: {}, retry: {})",
                to.display(),
                first,
                second
            ),
        )
    })
}
