//! The font under construction, in font units.

use std::collections::HashMap;

use kurbo::{BezPath, Shape};
use log::warn;

use crate::{config::CompileConfig, types::GlyphName};

/// Font-wide metadata that doesn't vary per glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticMetadata {
    pub font_name: String,
    pub full_name: String,
    pub family_name: String,
    pub units_per_em: u16,
    pub ascender: i16,
    pub descender: i16,
    pub version: String,
}

impl StaticMetadata {
    pub fn new(config: &CompileConfig) -> StaticMetadata {
        StaticMetadata {
            font_name: config.font_name.clone(),
            full_name: config.full_name.clone(),
            family_name: config.family_name.clone(),
            units_per_em: config.units_per_em,
            ascender: config.ascender,
            descender: config.descender,
            version: "Version 1.0".to_string(),
        }
    }
}

/// One glyph: a name, the character it maps, an outline, an advance.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub name: GlyphName,
    /// None only for .notdef, which sits outside the character map.
    pub codepoint: Option<char>,
    pub outline: BezPath,
    pub advance_width: f64,
}

impl Glyph {
    /// A glyph whose advance is its right edge plus the configured padding.
    ///
    /// An empty outline has a right edge of zero so its advance is bare
    /// padding.
    pub fn new(
        name: GlyphName,
        codepoint: char,
        outline: BezPath,
        padding_units: f64,
    ) -> Glyph {
        let right_edge = if outline.elements().is_empty() {
            0.0
        } else {
            outline.bounding_box().max_x()
        };
        Glyph {
            name,
            codepoint: Some(codepoint),
            outline,
            advance_width: right_edge + padding_units,
        }
    }

    fn notdef(units_per_em: u16) -> Glyph {
        Glyph {
            name: GlyphName::NOTDEF,
            codepoint: None,
            outline: BezPath::new(),
            advance_width: units_per_em as f64,
        }
    }
}

/// The glyphs of the font in final glyph-id order.
#[derive(Debug, Clone)]
pub struct IconIr {
    pub static_metadata: StaticMetadata,
    glyphs: Vec<Glyph>,
    by_codepoint: HashMap<char, usize>,
}

impl IconIr {
    /// An IR holding only .notdef, which is always glyph id 0.
    pub fn new(static_metadata: StaticMetadata) -> IconIr {
        let notdef = Glyph::notdef(static_metadata.units_per_em);
        IconIr {
            static_metadata,
            glyphs: vec![notdef],
            by_codepoint: HashMap::new(),
        }
    }

    /// Create or overwrite the glyph mapped at `glyph.codepoint`.
    ///
    /// Mapping a character twice replaces the slot's outline in place rather
    /// than appending a glyph; the first occurrence keeps its glyph id.
    pub fn insert(&mut self, glyph: Glyph) {
        let Some(codepoint) = glyph.codepoint else {
            self.glyphs.push(glyph);
            return;
        };
        match self.by_codepoint.get(&codepoint) {
            Some(&gid) => {
                warn!(
                    "{codepoint:?} already mapped by '{}'; replacing with '{}'",
                    self.glyphs[gid].name, glyph.name
                );
                self.glyphs[gid] = glyph;
            }
            None => {
                self.by_codepoint.insert(codepoint, self.glyphs.len());
                self.glyphs.push(glyph);
            }
        }
    }

    /// Glyphs in glyph-id order, .notdef first.
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn get(&self, codepoint: char) -> Option<&Glyph> {
        self.by_codepoint.get(&codepoint).map(|gid| &self.glyphs[*gid])
    }
}
