//! 'glyf' and 'loca' compilation
//!
//! Every glyph here is a simple (contour) glyph; there are no components and
//! no variations. Each glyph is built in isolation and then the records are
//! glued together to form the final table.

use iconir::{ir, types::GlyphName};
use kurbo::{cubics_to_quadratic_splines, BezPath, CubicBez, PathEl, Point};
use log::trace;
use write_fonts::{
    dump_table,
    tables::glyf::{Bbox, Contour, SimpleGlyph},
    types::Tag,
    OtRound,
};

use crate::error::Error;

/// Whether loca stores halved u16 offsets or raw u32 ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaFormat {
    Short,
    Long,
}

/// A glyph ready to become a glyf record.
#[derive(Debug, Clone)]
pub struct Glyph {
    pub name: GlyphName,
    pub advance: u16,
    simple: Option<SimpleGlyph>,
}

impl Glyph {
    /// True for glyphs with no outline; they write as zero bytes of glyf.
    pub fn is_empty(&self) -> bool {
        self.simple.is_none()
    }

    pub fn bbox(&self) -> Option<Bbox> {
        self.simple.as_ref().map(|simple| simple.bbox)
    }

    pub fn num_points(&self) -> usize {
        self.simple
            .as_ref()
            .map(|simple| simple.contours.iter().map(Contour::len).sum())
            .unwrap_or_default()
    }

    pub fn num_contours(&self) -> usize {
        self.simple
            .as_ref()
            .map(|simple| simple.contours.len())
            .unwrap_or_default()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        match &self.simple {
            Some(simple) => dump_table(simple).map_err(|source| Error::DumpTableError {
                table: Tag::new(b"glyf"),
                source,
            }),
            None => Ok(Vec::new()),
        }
    }
}

/// Build one binary-ready glyph per IR glyph, in glyph-id order.
pub fn create_glyphs(ir: &ir::IconIr) -> Result<Vec<Glyph>, Error> {
    ir.glyphs().iter().map(create_glyph).collect()
}

fn create_glyph(ir_glyph: &ir::Glyph) -> Result<Glyph, Error> {
    let advance: u16 = ir_glyph.advance_width.ot_round();
    if ir_glyph.outline.elements().is_empty() {
        return Ok(Glyph {
            name: ir_glyph.name.clone(),
            advance,
            simple: None,
        });
    }
    trace!("Convert '{}' to quadratic", ir_glyph.name);
    let path = cubics_to_quadratics(&ir_glyph.outline);
    let simple =
        SimpleGlyph::from_bezpath(&path).map_err(|kurbo_problem| Error::KurboError {
            glyph_name: ir_glyph.name.clone(),
            kurbo_problem,
            context: "converting outline to a glyf record".to_string(),
        })?;
    Ok(Glyph {
        name: ir_glyph.name.clone(),
        advance,
        simple: Some(simple),
    })
}

/// Convert cubic segments to quadratic splines, leaving everything else alone.
fn cubics_to_quadratics(path: &BezPath) -> BezPath {
    let mut converted = BezPath::new();
    let mut subpath_start = Point::ZERO;
    let mut current = Point::ZERO;
    for el in path.elements() {
        match el {
            PathEl::MoveTo(p) => {
                subpath_start = *p;
                current = *p;
                converted.move_to(*p);
            }
            PathEl::LineTo(p) => {
                current = *p;
                converted.line_to(*p);
            }
            PathEl::QuadTo(p1, p2) => {
                current = *p2;
                converted.quad_to(*p1, *p2);
            }
            PathEl::CurveTo(p1, p2, p3) => {
                let cubic = CubicBez {
                    p0: current,
                    p1: *p1,
                    p2: *p2,
                    p3: *p3,
                };
                // TODO what should we pass for accuracy
                let Some(quad_splines) = cubics_to_quadratic_splines(&[cubic], 1.0) else {
                    panic!("unable to convert to quadratic {cubic:?}");
                };
                for quad_spline in &quad_splines {
                    for quad in quad_spline.to_quads() {
                        converted.quad_to(quad.p1, quad.p2);
                    }
                }
                current = *p3;
            }
            PathEl::ClosePath => {
                current = subpath_start;
                converted.close_path();
            }
        }
    }
    converted
}

/// glyf record bytes plus the loca offsets that index them.
pub struct GlyfLoca {
    pub glyf: Vec<u8>,
    pub raw_loca: Vec<u8>,
    pub format: LocaFormat,
}

/// Glue the glyph records together and index them.
pub fn glue_glyf_loca(glyphs: &[Glyph]) -> Result<GlyfLoca, Error> {
    let mut offsets = vec![0u32];
    let mut glyf: Vec<u8> = Vec::new();
    for glyph in glyphs {
        let mut bytes = glyph.to_bytes()?;
        // records are long-aligned; an empty glyph stays zero bytes
        while bytes.len() % 4 != 0 {
            bytes.push(0);
        }
        offsets.push(offsets.last().unwrap() + bytes.len() as u32);
        glyf.extend(bytes);
    }
    let (raw_loca, format) = dump_loca(&offsets);
    Ok(GlyfLoca {
        glyf,
        raw_loca,
        format,
    })
}

fn dump_loca(offsets: &[u32]) -> (Vec<u8>, LocaFormat) {
    // Offsets are all even (records are padded) so short format works as
    // long as the halved final offset fits a u16
    let format = if offsets.last().unwrap() / 2 <= u16::MAX as u32 {
        LocaFormat::Short
    } else {
        LocaFormat::Long
    };
    let raw_loca = match format {
        LocaFormat::Short => offsets
            .iter()
            .flat_map(|off| ((off / 2) as u16).to_be_bytes())
            .collect(),
        LocaFormat::Long => offsets.iter().flat_map(|off| off.to_be_bytes()).collect(),
    };
    (raw_loca, format)
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Shape};

    use super::*;

    fn boxy_ir_glyph(name: &str, right_edge: f64) -> ir::Glyph {
        let outline = Rect::new(0.0, 0.0, right_edge, 500.0).to_path(0.1);
        ir::Glyph::new(name.into(), 'a', outline, 50.0)
    }

    #[test]
    fn cubics_become_quadratics() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.curve_to((100.0, 200.0), (300.0, 200.0), (400.0, 0.0));
        path.close_path();

        let converted = cubics_to_quadratics(&path);
        assert!(
            !converted
                .elements()
                .iter()
                .any(|el| matches!(el, PathEl::CurveTo(..))),
            "{converted:?}"
        );
        // the end point survives conversion
        assert!(converted
            .elements()
            .iter()
            .any(|el| matches!(el, PathEl::QuadTo(_, p) if *p == Point::new(400.0, 0.0))));
    }

    #[test]
    fn lines_pass_through_untouched() {
        let path = Rect::new(0.0, 0.0, 10.0, 10.0).to_path(0.1);
        let converted = cubics_to_quadratics(&path);
        assert_eq!(path.elements(), converted.elements());
    }

    #[test]
    fn empty_outline_is_an_empty_record() {
        let glyph = create_glyph(&ir::Glyph::new("A".into(), 'A', BezPath::new(), 50.0)).unwrap();
        assert!(glyph.is_empty());
        assert!(glyph.to_bytes().unwrap().is_empty());
        assert_eq!(50, glyph.advance);
    }

    #[test]
    fn simple_glyph_has_a_bbox_and_points() {
        let glyph = create_glyph(&boxy_ir_glyph("a", 400.0)).unwrap();
        let bbox = glyph.bbox().unwrap();
        assert_eq!((0, 0, 400, 500), (bbox.x_min, bbox.y_min, bbox.x_max, bbox.y_max));
        assert_eq!(1, glyph.num_contours());
        assert_eq!(4, glyph.num_points());
    }

    #[test]
    fn empty_glyphs_repeat_their_loca_offset() {
        let glyphs = vec![
            create_glyph(&ir::Glyph::new("A".into(), 'A', BezPath::new(), 50.0)).unwrap(),
            create_glyph(&boxy_ir_glyph("a", 400.0)).unwrap(),
        ];
        let glyf_loca = glue_glyf_loca(&glyphs).unwrap();
        assert_eq!(LocaFormat::Short, glyf_loca.format);
        // offsets: 0, 0, len(glyf)
        let end = (glyf_loca.glyf.len() / 2) as u16;
        let mut expected = vec![0u8, 0, 0, 0];
        expected.extend(end.to_be_bytes());
        assert_eq!(expected, glyf_loca.raw_loca);
    }

    #[test]
    fn loca_goes_long_past_the_u16_horizon() {
        let (short, format) = dump_loca(&[0, 16, 131068]);
        assert_eq!(LocaFormat::Short, format);
        assert_eq!(6, short.len());

        let (long, format) = dump_loca(&[0, 16, 131074]);
        assert_eq!(LocaFormat::Long, format);
        assert_eq!(12, long.len());
    }
}
