//! Generates a [cmap](https://learn.microsoft.com/en-us/typography/opentype/spec/cmap) table.

use iconir::ir::IconIr;
use write_fonts::{
    dump_table,
    tables::cmap::Cmap,
    types::{GlyphId, Tag},
};

use crate::error::Error;

/// Generate [cmap](https://learn.microsoft.com/en-us/typography/opentype/spec/cmap)
///
/// cmap only accomodates single codepoint : glyph mappings, which is all an
/// icon font has; .notdef is the one glyph that stays out.
pub fn create_cmap(ir: &IconIr) -> Result<Vec<u8>, Error> {
    let mappings = ir.glyphs().iter().enumerate().filter_map(|(gid, glyph)| {
        glyph
            .codepoint
            .map(|codepoint| (codepoint, GlyphId::new(gid as u32)))
    });
    let cmap = Cmap::from_mappings(mappings)?;
    dump_table(&cmap).map_err(|source| Error::DumpTableError {
        table: Tag::new(b"cmap"),
        source,
    })
}
