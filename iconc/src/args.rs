//! Command line arguments

use std::path::PathBuf;

use clap::Parser;
use iconir::config::{
    CompileConfig, DEFAULT_ASCENDER, DEFAULT_DESCENDER, DEFAULT_UNITS_PER_EM,
};

/// What icon font can we build for you today?
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct Args {
    /// A directory of SVG glyph drawings, one file per glyph
    #[arg(short, long)]
    pub source: PathBuf,

    /// Where to write glyphs.ttf and glyphs.woff; the parent of --source if absent
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// PostScript font name
    #[arg(long)]
    #[clap(default_value = "ViewerGlyphs")]
    pub font_name: String,

    /// Full font name
    #[arg(long)]
    #[clap(default_value = "Viewer Glyphs")]
    pub full_name: String,

    /// Font family name
    #[arg(long)]
    #[clap(default_value = "Viewer Glyphs")]
    pub family_name: String,

    /// Em size; SVG drawings are scaled so the viewport height spans it
    #[arg(long, default_value_t = DEFAULT_UNITS_PER_EM)]
    pub units_per_em: u16,

    /// Ascender in font units; drawings are flipped about this line
    #[arg(long, default_value_t = DEFAULT_ASCENDER, allow_hyphen_values = true)]
    pub ascender: i16,

    /// Descender in font units, typically negative
    #[arg(long, default_value_t = DEFAULT_DESCENDER, allow_hyphen_values = true)]
    pub descender: i16,

    /// Units of advance width beyond each glyph's right edge
    #[arg(long)]
    #[clap(default_value = "50")]
    pub padding: u16,

    /// Character seeded into the character map before any drawing is imported
    #[arg(long)]
    #[clap(default_value = "A")]
    pub bootstrap_char: char,
}

impl Args {
    /// Collect the arguments into a [CompileConfig].
    pub fn config(&self) -> CompileConfig {
        let mut config = CompileConfig::new(&self.source);
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        config.font_name = self.font_name.clone();
        config.full_name = self.full_name.clone();
        config.family_name = self.family_name.clone();
        config.units_per_em = self.units_per_em;
        config.ascender = self.ascender;
        config.descender = self.descender;
        config.padding_units = self.padding as f64;
        config.bootstrap_char = self.bootstrap_char;
        config
    }
}
