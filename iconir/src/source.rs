//! Enumeration of the glyph source directory.

use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{error::Error, types::GlyphName};

/// One vector drawing waiting to become a glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphSource {
    /// The file stem; names the character slot the drawing fills.
    pub name: GlyphName,
    pub path: PathBuf,
}

/// The visible glyph drawings in a directory, sorted by filename.
///
/// Entries whose name starts with `.` are treated as non-glyph/system files
/// and skipped, as are subdirectories. Readdir order varies by OS and
/// filesystem so entries are sorted to keep glyph ids stable run over run.
pub fn glyph_sources(dir: &Path) -> Result<Vec<GlyphSource>, Error> {
    if !dir.exists() {
        return Err(Error::DirectoryExpected(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    let file_io = |source| Error::FileIo {
        path: dir.to_path_buf(),
        source,
    };
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(file_io)? {
        let entry = entry.map_err(file_io)?;
        let path = entry.path();
        let Some(file_name) = path.file_name().and_then(OsStr::to_str) else {
            continue;
        };
        if file_name.starts_with('.') {
            debug!("Skip hidden entry {file_name}");
            continue;
        }
        if !path.is_file() {
            debug!("Skip non-file entry {file_name}");
            continue;
        }
        paths.push(path);
    }
    paths.sort();
    paths
        .into_iter()
        .map(|path| {
            let stem = path
                .file_stem()
                .and_then(OsStr::to_str)
                .ok_or_else(|| Error::NoFileName(path.clone()))?;
            Ok(GlyphSource {
                name: stem.into(),
                path: path.clone(),
            })
        })
        .collect()
}
