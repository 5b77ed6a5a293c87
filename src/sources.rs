//! File discovery and whole-file reads shared by both drivers.

use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use ignore::WalkBuilder;
use tracing::{debug, trace};

use crate::errors::errors::{Error, ErrorImpl};

/// Check whether `path` ends in `.{extension}`.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension() == Some(OsStr::new(extension))
}

/// Collect every regular file under `root` with the given extension.
///
/// Entries are sorted by file name at each directory level, so repeated runs
/// over an unchanged tree see the same order. Ignore files and hidden-file
/// rules are not applied: every matching file is scanned.
pub fn find_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>, Error> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| {
            Error::new(ErrorImpl::Walk { source }, Some(root.to_path_buf()))
        })?;

        let is_file = entry.file_type().is_some_and(|t| t.is_file());
        if is_file && has_extension(entry.path(), extension) {
            trace!(path = %entry.path().display(), "found source file");
            files.push(entry.into_path());
        }
    }

    debug!(root = %root.display(), count = files.len(), "collected source files");
    Ok(files)
}

/// Read a whole file. Bytes that are not valid UTF-8 become U+FFFD, which
/// never touches a `\n`, so line numbers survive legacy encodings.
pub fn read_source(path: &Path) -> Result<String, Error> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;

    match String::from_utf8(bytes) {
        Ok(source) => Ok(source),
        Err(e) => {
            debug!(path = %path.display(), "source is not valid UTF-8, decoding lossily");
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}
