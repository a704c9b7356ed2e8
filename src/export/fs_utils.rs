// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Check that `path` can be created or overwritten.
///
/// - file does not exist → Ok
/// - file exists and `force` → Ok
/// - file exists, no `force` → ask the user on stdin (default: no)
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    print!("The file '{}' already exists. Overwrite? [y/N]: ", path.display());
    io::stdout().flush().ok();

    let stdin = io::stdin();
    confirm(stdin.lock(), path)
}

fn confirm<R: BufRead>(mut input: R, path: &Path) -> AppResult<()> {
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "existing file '{}' not overwritten",
            path.display()
        )))
    }
}
