//! Generates the [hmtx](https://learn.microsoft.com/en-us/typography/opentype/spec/hmtx),
//! [hhea](https://learn.microsoft.com/en-us/typography/opentype/spec/hhea) and
//! [maxp](https://learn.microsoft.com/en-us/typography/opentype/spec/maxp) tables

use std::cmp::{max, min};

use write_fonts::{
    dump_table,
    tables::{glyf::Bbox, hhea::Hhea, hmtx::Hmtx, maxp::Maxp, vmtx::LongMetric},
    types::{FWord, Tag, UfWord},
};

use crate::{error::Error, glyphs::Glyph};

/// Font-wide, or global, limits
#[derive(Debug, Default)]
struct FontLimits {
    min_left_side_bearing: Option<i16>,
    min_right_side_bearing: Option<i16>,
    x_max_extent: Option<i16>,
    advance_width_max: u16,
    max_points: u16,
    max_contours: u16,
    bbox: Option<Bbox>,
}

impl FontLimits {
    fn update(&mut self, advance: u16, glyph: &Glyph) {
        // min side bearings and the font bbox accrue from non-empty glyphs only
        if let Some(bbox) = glyph.bbox() {
            let left_side_bearing = bbox.x_min;
            // aw - (lsb + xMax - xMin) ... but if lsb == xMin then just advance - xMax
            let right_side_bearing: i16 = match advance as i32 - bbox.x_max as i32 {
                value if value < i16::MIN as i32 => i16::MIN,
                value if value > i16::MAX as i32 => i16::MAX,
                value => value as i16,
            };
            self.min_left_side_bearing = self
                .min_left_side_bearing
                .map(|v| min(v, left_side_bearing))
                .or(Some(left_side_bearing));
            self.min_right_side_bearing = self
                .min_right_side_bearing
                .map(|v| min(v, right_side_bearing))
                .or(Some(right_side_bearing));
            self.x_max_extent = self
                .x_max_extent
                .map(|v| max(v, bbox.x_max))
                .or(Some(bbox.x_max));
            self.advance_width_max = max(self.advance_width_max, advance);
            self.bbox = Some(match self.bbox {
                Some(acc) => Bbox {
                    x_min: min(acc.x_min, bbox.x_min),
                    y_min: min(acc.y_min, bbox.y_min),
                    x_max: max(acc.x_max, bbox.x_max),
                    y_max: max(acc.y_max, bbox.y_max),
                },
                None => bbox,
            });
        }
        self.max_points = max(self.max_points, glyph.num_points() as u16);
        self.max_contours = max(self.max_contours, glyph.num_contours() as u16);
    }
}

/// The binary metric tables plus the font bbox, which head and OS/2 want too.
pub struct Metrics {
    pub hhea: Vec<u8>,
    pub hmtx: Vec<u8>,
    pub maxp: Vec<u8>,
    /// None when every glyph is empty.
    pub bbox: Option<Bbox>,
}

// Keep one metric carrying the advance that repeats, so readers can extend it
fn trailing_lsb_run(long_metrics: &[LongMetric]) -> usize {
    let Some(last) = long_metrics.last() else {
        return 0;
    };
    let mut lsb_run = 0;
    for metric in long_metrics.iter().rev() {
        if metric.advance != last.advance {
            break;
        }
        lsb_run += 1;
    }
    lsb_run - 1
}

/// Generate:
///
/// * [hmtx](https://learn.microsoft.com/en-us/typography/opentype/spec/hmtx)
/// * [hhea](https://learn.microsoft.com/en-us/typography/opentype/spec/hhea)
/// * [maxp](https://learn.microsoft.com/en-us/typography/opentype/spec/maxp)
pub fn create_metrics(glyphs: &[Glyph], ascender: i16, descender: i16) -> Result<Metrics, Error> {
    let mut glyph_limits = FontLimits::default();

    let mut long_metrics: Vec<LongMetric> = glyphs
        .iter()
        .map(|glyph| {
            glyph_limits.update(glyph.advance, glyph);
            LongMetric {
                advance: glyph.advance,
                side_bearing: glyph.bbox().map(|bbox| bbox.x_min).unwrap_or_default(),
            }
        })
        .collect();

    // If there's a run at the end with matching advances we can save some bytes
    let num_lsb_only = trailing_lsb_run(&long_metrics);
    let lsbs = long_metrics
        .split_off(long_metrics.len() - num_lsb_only)
        .into_iter()
        .map(|metric| metric.side_bearing)
        .collect();
    let number_of_h_metrics = long_metrics.len() as u16;

    let hmtx = Hmtx::new(long_metrics, lsbs);
    let raw_hmtx = dump_table(&hmtx).map_err(|source| Error::DumpTableError {
        table: Tag::new(b"hmtx"),
        source,
    })?;

    let hhea = Hhea {
        ascender: FWord::new(ascender),
        descender: FWord::new(descender),
        line_gap: FWord::new(0),
        advance_width_max: UfWord::new(glyph_limits.advance_width_max),
        min_left_side_bearing: glyph_limits.min_left_side_bearing.unwrap_or_default().into(),
        min_right_side_bearing: glyph_limits
            .min_right_side_bearing
            .unwrap_or_default()
            .into(),
        x_max_extent: glyph_limits.x_max_extent.unwrap_or_default().into(),
        caret_slope_rise: 1,
        caret_slope_run: 0,
        caret_offset: 0,
        number_of_h_metrics,
        ..Default::default()
    };
    let raw_hhea = dump_table(&hhea).map_err(|source| Error::DumpTableError {
        table: Tag::new(b"hhea"),
        source,
    })?;

    let maxp = Maxp {
        num_glyphs: glyphs.len().try_into().unwrap(),
        // maxp computes its version based on whether fields are set
        // if you fail to set any of them it gets angry with you so set all of them
        max_points: Some(glyph_limits.max_points),
        max_contours: Some(glyph_limits.max_contours),
        max_composite_points: Some(0),
        max_composite_contours: Some(0),
        max_zones: Some(1),
        max_twilight_points: Some(0),
        max_storage: Some(0),
        max_function_defs: Some(0),
        max_instruction_defs: Some(0),
        max_stack_elements: Some(0),
        max_size_of_instructions: Some(0),
        max_component_elements: Some(0),
        max_component_depth: Some(0),
    };
    let raw_maxp = dump_table(&maxp).map_err(|source| Error::DumpTableError {
        table: Tag::new(b"maxp"),
        source,
    })?;

    Ok(Metrics {
        hhea: raw_hhea,
        hmtx: raw_hmtx,
        maxp: raw_maxp,
        bbox: glyph_limits.bbox,
    })
}
