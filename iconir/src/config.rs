//! The settings of a single compile.

use std::path::PathBuf;

pub const DEFAULT_UNITS_PER_EM: u16 = 1000;
/// Ascender in font units; SVG drawings are flipped about this line.
pub const DEFAULT_ASCENDER: i16 = 800;
pub const DEFAULT_DESCENDER: i16 = -200;
/// Units of advance width beyond each glyph's right edge.
pub const DEFAULT_PADDING: f64 = 50.0;
/// Character seeded into the character map before any drawing is imported.
pub const DEFAULT_BOOTSTRAP_CHAR: char = 'A';

/// Everything a compile needs to know, in one place.
///
/// All fields have sensible defaults and are individually overridable from
/// the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct CompileConfig {
    /// Directory of SVG drawings, one file per glyph.
    pub source_dir: PathBuf,
    /// Where glyphs.ttf and glyphs.woff land.
    pub output_dir: PathBuf,
    /// PostScript font name.
    pub font_name: String,
    pub full_name: String,
    pub family_name: String,
    pub units_per_em: u16,
    pub ascender: i16,
    pub descender: i16,
    pub padding_units: f64,
    pub bootstrap_char: char,
}

impl CompileConfig {
    /// A config with default metadata, writing output alongside the source
    /// directory.
    pub fn new(source_dir: impl Into<PathBuf>) -> CompileConfig {
        let source_dir = source_dir.into();
        // Path::parent happily returns "" for a relative path like "svg"
        let output_dir = match source_dir.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => source_dir.clone(),
        };
        CompileConfig {
            source_dir,
            output_dir,
            font_name: "ViewerGlyphs".to_string(),
            full_name: "Viewer Glyphs".to_string(),
            family_name: "Viewer Glyphs".to_string(),
            units_per_em: DEFAULT_UNITS_PER_EM,
            ascender: DEFAULT_ASCENDER,
            descender: DEFAULT_DESCENDER,
            padding_units: DEFAULT_PADDING,
            bootstrap_char: DEFAULT_BOOTSTRAP_CHAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_lands_next_to_the_source_dir() {
        let config = CompileConfig::new("/fonts/icons/svg");
        assert_eq!(PathBuf::from("/fonts/icons"), config.output_dir);
    }

    #[test]
    fn rootless_source_writes_in_place() {
        let config = CompileConfig::new("svg");
        assert_eq!(config.source_dir, config.output_dir);
    }
}
