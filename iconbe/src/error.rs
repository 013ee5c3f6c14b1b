use std::io;

use iconir::types::GlyphName;
use thiserror::Error;
use write_fonts::{
    read::ReadError,
    tables::{cmap::CmapConflict, glyf::MalformedPath},
    types::Tag,
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO failure")]
    IoError(#[from] io::Error),
    #[error("'{glyph_name}' {kurbo_problem:?} {context}")]
    KurboError {
        glyph_name: GlyphName,
        kurbo_problem: MalformedPath,
        context: String,
    },
    #[error(transparent)]
    CmapConflict(#[from] CmapConflict),
    #[error("Generating bytes for {table} failed: '{source}'")]
    DumpTableError {
        table: Tag,
        #[source]
        source: write_fonts::error::Error,
    },
    #[error("Unable to re-read the assembled font: '{0}'")]
    ReadFont(#[source] ReadError),
    #[error("Assembled font is missing the {0} table")]
    MissingTable(Tag),
}
