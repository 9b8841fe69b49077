use crate::shared::error::DepTreeError;
use std::fs;
use std::path::Path;

/// Largest dependency tree report accepted for reading (100 MB)
pub const MAX_REPORT_SIZE: u64 = 100 * 1024 * 1024;

/// Checks a dependency tree report before it is read and returns its size
///
/// The link itself is inspected rather than its target, so a report reached
/// through a symbolic link is refused.
pub fn check_report_file(path: &Path) -> std::result::Result<u64, DepTreeError> {
    let metadata = fs::symlink_metadata(path).map_err(|e| DepTreeError::InputReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    if metadata.file_type().is_symlink() {
        return Err(DepTreeError::SecurityError {
            path: path.to_path_buf(),
            reason: "The dependency tree report is a symbolic link".to_string(),
            hint: "Pass the path of the saved report itself".to_string(),
        });
    }

    if !metadata.is_file() {
        return Err(DepTreeError::InputReadError {
            path: path.to_path_buf(),
            details: "not a regular file; INPUT must be a saved `mvn dependency:tree` report"
                .to_string(),
        });
    }

    check_report_size(path, metadata.len())?;
    Ok(metadata.len())
}

pub fn check_report_size(path: &Path, size: u64) -> std::result::Result<(), DepTreeError> {
    if size > MAX_REPORT_SIZE {
        return Err(DepTreeError::ReportTooLarge {
            path: path.to_path_buf(),
            size,
            limit_mb: MAX_REPORT_SIZE / (1024 * 1024),
        });
    }
    Ok(())
}

/// Checks where a report is about to be written
///
/// A missing target is fine as long as its directory exists; an existing
/// symbolic link is refused so the write cannot land elsewhere.
pub fn check_output_target(path: &Path) -> std::result::Result<(), DepTreeError> {
    if let Some(parent) = path.parent() {
        if parent != Path::new("") && !parent.is_dir() {
            return Err(DepTreeError::FileWriteError {
                path: path.to_path_buf(),
                details: format!("Parent directory does not exist: {}", parent.display()),
            });
        }
    }

    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.file_type().is_symlink() => Err(DepTreeError::SecurityError {
            path: path.to_path_buf(),
            reason: "Report output path is a symbolic link".to_string(),
            hint: "Choose a regular file path for -o/--output".to_string(),
        }),
        _ => Ok(()),
    }
}
