//! Generates a [post](https://learn.microsoft.com/en-us/typography/opentype/spec/post) table.

use iconir::ir::IconIr;
use write_fonts::{dump_table, tables::post::Post, types::Tag};

use crate::error::Error;

/// Generate [post](https://learn.microsoft.com/en-us/typography/opentype/spec/post)
///
/// A v2 table so the source file stems survive as glyph names.
pub fn create_post(ir: &IconIr) -> Result<Vec<u8>, Error> {
    let post = Post::new_v2(ir.glyphs().iter().map(|glyph| glyph.name.as_str()));
    dump_table(&post).map_err(|source| Error::DumpTableError {
        table: Tag::new(b"post"),
        source,
    })
}

#[cfg(test)]
mod tests {
    use iconir::{config::CompileConfig, ir};
    use kurbo::BezPath;
    use write_fonts::read::{tables::post::Post as ReadPost, FontData, FontRead};
    use write_fonts::types::GlyphId16;

    use super::*;

    #[test]
    fn stems_survive_as_glyph_names() {
        let mut ir = ir::IconIr::new(ir::StaticMetadata::new(&CompileConfig::new("svg")));
        ir.insert(ir::Glyph::new("arrow".into(), '→', BezPath::new(), 50.0));

        let bytes = create_post(&ir).unwrap();
        let post = ReadPost::read(FontData::new(&bytes)).unwrap();
        assert_eq!(Some(".notdef"), post.glyph_name(GlyphId16::new(0)));
        assert_eq!(Some("arrow"), post.glyph_name(GlyphId16::new(1)));
    }
}
