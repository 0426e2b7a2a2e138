//! Atomic file write using the write-rename pattern.
//!
//! Session bytes go to `{path}.tmp` first, are flushed with `sync_all()`,
//! and only then renamed over the final path. A crash mid-write therefore
//! leaves any previous session file untouched.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Atomically write `data` to `path`.
pub fn atomic_write(path: &str, data: &[u8]) -> std::io::Result<()> {
    let final_path = Path::new(path);
    let tmp_path = format!("{path}.tmp");

    if let Some(parent) = final_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = File::create(&tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;
    fs::rename(&tmp_path, final_path)?;

    Ok(())
}
