//! Generates a [OS/2](https://learn.microsoft.com/en-us/typography/opentype/spec/os2) table.

use iconir::ir::IconIr;
use write_fonts::{
    dump_table,
    tables::{
        glyf::Bbox,
        os2::{Os2, SelectionFlags},
    },
    types::Tag,
    OtRound,
};

use crate::{error::Error, glyphs::Glyph};

/// <https://github.com/fonttools/fonttools/blob/115275cbf429d91b75ac5536f5f0b2d6fe9d823a/Lib/fontTools/ttLib/tables/O_S_2f_2.py#L336-L348>
fn x_avg_char_width(glyphs: &[Glyph]) -> i16 {
    // count width > 0 only
    let (count, total) = glyphs
        .iter()
        .filter_map(|glyph| match glyph.advance {
            0 => None,
            v => Some(v as u64),
        })
        .fold((0_u64, 0_u64), |(count, total), value| {
            (count + 1, total + value)
        });
    if count == 0 {
        return 0;
    }
    (total as f32 / count as f32).ot_round()
}

/// Generate [OS/2](https://learn.microsoft.com/en-us/typography/opentype/spec/os2)
pub fn create_os2(ir: &IconIr, glyphs: &[Glyph], bbox: Option<Bbox>) -> Result<Vec<u8>, Error> {
    let static_metadata = &ir.static_metadata;
    let codepoints: Vec<u32> = ir
        .glyphs()
        .iter()
        .filter_map(|glyph| glyph.codepoint.map(|c| c as u32))
        .collect();
    let min_char = codepoints.iter().min().copied().unwrap_or_default();
    let max_char = codepoints.iter().max().copied().unwrap_or_default();
    let bbox = bbox.unwrap_or_default();

    let os2 = Os2 {
        x_avg_char_width: x_avg_char_width(glyphs),
        us_weight_class: 400,
        us_width_class: 5,
        fs_selection: SelectionFlags::REGULAR,
        ach_vend_id: Tag::new(b"NONE"),
        s_typo_ascender: static_metadata.ascender,
        s_typo_descender: static_metadata.descender,
        s_typo_line_gap: 0,
        us_win_ascent: bbox.y_max.max(static_metadata.ascender).max(0) as u16,
        us_win_descent: (-(bbox.y_min.min(static_metadata.descender).min(0) as i32)) as u16,
        us_first_char_index: min_char.min(0xFFFF) as u16,
        us_last_char_index: max_char.min(0xFFFF) as u16,
        // Latin 1 only
        ul_code_page_range_1: Some(1),
        ul_code_page_range_2: Some(0),
        // Avoid "field must be present for version 2" caused by default to None
        s_cap_height: Some(static_metadata.ascender),
        sx_height: Some(0),
        us_default_char: Some(0),
        us_break_char: Some(0x20),
        us_max_context: Some(0),
        ..Default::default()
    };
    dump_table(&os2).map_err(|source| Error::DumpTableError {
        table: Tag::new(b"OS/2"),
        source,
    })
}

#[cfg(test)]
mod tests {
    use iconir::{config::CompileConfig, ir};
    use kurbo::{BezPath, Rect, Shape};
    use write_fonts::read::{tables::os2::Os2 as ReadOs2, FontData, FontRead};

    use super::*;
    use crate::glyphs::create_glyphs;

    #[test]
    fn char_range_and_average_width() {
        let mut ir = ir::IconIr::new(ir::StaticMetadata::new(&CompileConfig::new("svg")));
        ir.insert(ir::Glyph::new("A".into(), 'A', BezPath::new(), 50.0));
        ir.insert(ir::Glyph::new(
            "b".into(),
            'b',
            Rect::new(0.0, 0.0, 350.0, 500.0).to_path(0.1),
            50.0,
        ));
        let glyphs = create_glyphs(&ir).unwrap();

        let bytes = create_os2(&ir, &glyphs, None).unwrap();
        let os2 = ReadOs2::read(FontData::new(&bytes)).unwrap();
        assert_eq!('A' as u16, os2.us_first_char_index());
        assert_eq!('b' as u16, os2.us_last_char_index());
        // advances are 1000 (.notdef), 50 (A) and 400 (b)
        assert_eq!((1450_f32 / 3.0).round() as i16, os2.x_avg_char_width());
        // v4 table with the code page ranges populated
        assert_eq!(4, os2.version());
        assert_eq!(Some(1), os2.ul_code_page_range_1());
        assert_eq!(Some(0), os2.ul_code_page_range_2());
    }
}
