//! Filesystem access to the dataset directories.
//!
//! Nothing is cached: every listing re-reads the directory and every
//! file request re-reads the file.

use std::io;
use std::path::Path;

use crate::error::ServeError;

/// Whether `name` is a bare filename that cannot escape its directory.
#[must_use]
pub fn is_plain_filename(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}

/// List the regular files in `dir` whose names end with `extension`.
///
/// Subdirectories and non-UTF-8 names are skipped. Names are returned
/// sorted so the gallery order is stable across platforms.
///
/// # Errors
///
/// Returns [`ServeError::ReadFailure`] if the directory cannot be read.
pub async fn list_images(dir: &Path, extension: &str) -> Result<Vec<String>, ServeError> {
    let failure = |source: io::Error| ServeError::ReadFailure {
        context: crate::routes::LIST_FAILURE,
        source,
    };

    let mut entries = tokio::fs::read_dir(dir).await.map_err(failure)?;
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(failure)? {
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if !name.ends_with(extension) {
            continue;
        }
        // Follows symlinks, unlike DirEntry::file_type.
        let is_file = tokio::fs::metadata(entry.path())
            .await
            .is_ok_and(|meta| meta.is_file());
        if is_file {
            names.push(name);
        }
    }
    names.sort_unstable();
    Ok(names)
}

/// Read `filename` from `dir`.
///
/// `missing` is the client message when the file is absent or the name
/// is not a plain filename; `failure` is the message for any other I/O
/// error.
///
/// # Errors
///
/// Returns [`ServeError::NotFound`] if the file does not exist, is a
/// directory, or `filename` is not a plain filename.
/// Returns [`ServeError::ReadFailure`] on any other I/O error.
pub async fn read_file(
    dir: &Path,
    filename: &str,
    missing: &'static str,
    failure: &'static str,
) -> Result<Vec<u8>, ServeError> {
    if !is_plain_filename(filename) {
        return Err(ServeError::NotFound(missing));
    }
    match tokio::fs::read(dir.join(filename)).await {
        Ok(bytes) => Ok(bytes),
        Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::IsADirectory) => {
            Err(ServeError::NotFound(missing))
        }
        Err(source) => Err(ServeError::ReadFailure {
            context: failure,
            source,
        }),
    }
}
