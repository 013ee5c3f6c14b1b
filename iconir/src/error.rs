use std::{io, path::PathBuf};

use thiserror::Error;

use crate::types::GlyphName;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing directory '{0}'")]
    DirectoryExpected(PathBuf),
    #[error("'{0}' exists but is not a directory")]
    NotADirectory(PathBuf),
    #[error("io failed for '{path}': '{source}'")]
    FileIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("'{0}' has no usable file name")]
    NoFileName(PathBuf),
    #[error("Unable to map '{0}' to a character")]
    UnmappableName(GlyphName),
    #[error("Unable to parse '{path}': '{source}'")]
    InvalidSvg {
        path: PathBuf,
        #[source]
        source: usvg::Error,
    },
}
