//! Utility functions for error handling
//!
//! File access helpers that attach the offending path and the reason the file
//! was needed to every failure.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{HeartRiskError, Result};

/// Safely open a file with rich error information
///
/// A path that does not exist yields [`HeartRiskError::ArtifactMissing`] so
/// callers can tell an absent artifact apart from an unreadable one.
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(HeartRiskError::ArtifactMissing {
            path: path.to_path_buf(),
        });
    }

    if !path.is_file() {
        return Err(HeartRiskError::Io {
            path: path.to_path_buf(),
            context: format!("Expected a file for: {purpose}"),
            source: io::Error::new(io::ErrorKind::InvalidInput, "path is not a file"),
        });
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check file permissions".to_string()
            }
            io::ErrorKind::NotFound => {
                "File not found - it may have been deleted during operation".to_string()
            }
            _ => format!("Failed to open file for: {purpose}"),
        };
        HeartRiskError::Io {
            path: path.to_path_buf(),
            context,
            source: e,
        }
    })
}

/// Safely read a file to string with rich error information
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    let mut file = safe_open_file(path, purpose)?;

    let mut content = String::new();
    match file.read_to_string(&mut content) {
        Ok(_) => Ok(content),
        Err(e) => {
            let context = match e.kind() {
                io::ErrorKind::InvalidData => {
                    "File contains invalid UTF-8 data - cannot read as text".to_string()
                }
                _ => format!("Failed to read file content for: {purpose}"),
            };
            Err(HeartRiskError::Io {
                path: path.to_path_buf(),
                context,
                source: e,
            })
        }
    }
}
