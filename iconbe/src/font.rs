//! Merge tables into a font

use log::debug;
use write_fonts::{
    read::{
        tables::{
            cmap::Cmap, glyf::Glyf, head::Head, hhea::Hhea, hmtx::Hmtx, loca::Loca, maxp::Maxp,
            name::Name, os2::Os2, post::Post,
        },
        TopLevelTable,
    },
    types::Tag,
    FontBuilder,
};

/// The binary tables of the font, ready to merge.
pub struct TableSet {
    pub cmap: Vec<u8>,
    pub glyf: Vec<u8>,
    pub head: Vec<u8>,
    pub hhea: Vec<u8>,
    pub hmtx: Vec<u8>,
    pub loca: Vec<u8>,
    pub maxp: Vec<u8>,
    pub name: Vec<u8>,
    pub os2: Vec<u8>,
    pub post: Vec<u8>,
}

/// Glue binary tables into a font.
///
/// The builder writes the table directory, checksums and the head checksum
/// adjustment; by the time this returns the bytes are a complete sfnt.
pub fn assemble(tables: &TableSet) -> Vec<u8> {
    let to_merge: [(Tag, &[u8]); 10] = [
        (Cmap::TAG, &tables.cmap),
        (Head::TAG, &tables.head),
        (Hhea::TAG, &tables.hhea),
        (Hmtx::TAG, &tables.hmtx),
        (Glyf::TAG, &tables.glyf),
        (Loca::TAG, &tables.loca),
        (Maxp::TAG, &tables.maxp),
        (Name::TAG, &tables.name),
        (Os2::TAG, &tables.os2),
        (Post::TAG, &tables.post),
    ];

    let mut builder = FontBuilder::default();
    for (tag, bytes) in to_merge {
        debug!("Grabbing {tag} for final font");
        builder.add_raw(tag, bytes);
    }
    let font = builder.build();
    debug!("Assembled {} byte font", font.len());
    font
}
