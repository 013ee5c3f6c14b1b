//! Import SVG drawings as font-unit outlines.
//!
//! Every path in the document is flattened into a single [BezPath], with
//! group transforms applied. SVG space is y-down with the origin at the top
//! left; font space is y-up with the origin on the baseline. The drawing is
//! scaled uniformly so the SVG viewport height spans the em, then flipped
//! about the ascender.

use std::{fs, path::Path};

use kurbo::{Affine, BezPath, Point};
use log::trace;
use usvg::tiny_skia_path::PathSegment;

use crate::error::Error;

/// Read one SVG file and return its outline in font units.
pub fn import_outline(path: &Path, units_per_em: u16, ascender: i16) -> Result<BezPath, Error> {
    let data = fs::read(path).map_err(|source| Error::FileIo {
        path: path.to_path_buf(),
        source,
    })?;
    let tree = usvg::Tree::from_data(&data, &usvg::Options::default()).map_err(|source| {
        Error::InvalidSvg {
            path: path.to_path_buf(),
            source,
        }
    })?;

    // usvg guarantees a non-zero viewport
    let scale = units_per_em as f64 / tree.size().height() as f64;
    let to_font_units = Affine::new([scale, 0.0, 0.0, -scale, 0.0, ascender as f64]);

    let mut outline = BezPath::new();
    append_group(tree.root(), &to_font_units, &mut outline);
    trace!(
        "Imported {} elements from {path:?} at scale {scale}",
        outline.elements().len()
    );
    Ok(outline)
}

fn append_group(group: &usvg::Group, to_font_units: &Affine, outline: &mut BezPath) {
    for node in group.children() {
        match node {
            usvg::Node::Group(group) => append_group(group, to_font_units, outline),
            usvg::Node::Path(path) => append_path(path, to_font_units, outline),
            // raster and text content isn't glyph geometry
            usvg::Node::Image(..) | usvg::Node::Text(..) => (),
        }
    }
}

fn append_path(path: &usvg::Path, to_font_units: &Affine, outline: &mut BezPath) {
    let Some(data) = path.data().clone().transform(path.abs_transform()) else {
        return;
    };
    let pt = |p: usvg::tiny_skia_path::Point| *to_font_units * Point::new(p.x as f64, p.y as f64);
    for segment in data.segments() {
        match segment {
            PathSegment::MoveTo(p) => outline.move_to(pt(p)),
            PathSegment::LineTo(p) => outline.line_to(pt(p)),
            PathSegment::QuadTo(p1, p2) => outline.quad_to(pt(p1), pt(p2)),
            PathSegment::CubicTo(p1, p2, p3) => outline.curve_to(pt(p1), pt(p2), pt(p3)),
            PathSegment::Close => outline.close_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use kurbo::{Rect, Shape};
    use tempfile::tempdir;

    use super::*;

    fn import(svg: &str) -> BezPath {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("glyph.svg");
        fs::write(&path, svg).unwrap();
        import_outline(&path, 1000, 800).unwrap()
    }

    #[test]
    fn a_box_lands_in_font_units() {
        // 1000x1000 viewport at upem 1000: scale 1, y flipped about y=800
        let outline = import(concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="1000" height="1000">"#,
            r#"<path d="M100 200 L300 200 L300 700 L100 700 Z"/></svg>"#,
        ));
        assert_eq!(Rect::new(100.0, 100.0, 300.0, 600.0), outline.bounding_box());
    }

    #[test]
    fn viewport_height_spans_the_em() {
        // 24x24 viewport: scale 1000/24
        let outline = import(concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">"#,
            r#"<path d="M0 0 L24 0 L24 24 L0 24 Z"/></svg>"#,
        ));
        let bbox = outline.bounding_box();
        assert_eq!(Rect::new(0.0, -200.0, 1000.0, 800.0), bbox);
    }

    #[test]
    fn group_transforms_are_applied() {
        let outline = import(concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="1000" height="1000">"#,
            r#"<g transform="translate(100 0)"><path d="M0 800 L100 800 L100 700 Z"/></g></svg>"#,
        ));
        let bbox = outline.bounding_box();
        assert_eq!(100.0, bbox.min_x());
        assert_eq!(200.0, bbox.max_x());
    }

    #[test]
    fn malformed_svg_is_an_import_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("bad.svg");
        fs::write(&path, b"this is not an svg").unwrap();
        assert!(matches!(
            import_outline(&path, 1000, 800),
            Err(Error::InvalidSvg { .. })
        ));
    }
}
