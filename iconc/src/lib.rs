//! A compiler for icon fonts.
//!
//! Points at a directory of SVG drawings and produces `glyphs.ttf` and
//! `glyphs.woff`, with one mapped glyph per visible file. The filename stem
//! names the character slot; the advance width is the outline's right edge
//! plus a configurable padding.

mod args;
mod error;

pub use args::Args;
pub use error::Error;

use std::{fs, path::Path};

use iconbe::{
    cmap,
    font::{self, TableSet},
    glyphs, head, metrics_and_limits, name, os2, post, woff,
};
use iconir::{
    config::CompileConfig,
    ir::{Glyph, IconIr, StaticMetadata},
    names, outline, source,
};
use kurbo::BezPath;
use log::info;

pub const TTF_FILE: &str = "glyphs.ttf";
pub const WOFF_FILE: &str = "glyphs.woff";

/// A compiled icon font, ready to persist.
pub struct CompiledFont {
    pub ttf: Vec<u8>,
    pub woff: Vec<u8>,
}

/// Compile the configured source directory into font bytes.
///
/// All or nothing: the first unreadable or unmappable source aborts the
/// whole run. Glyph ids follow filename order; the bootstrap character is
/// seeded first so it is always in the character map, whether or not a
/// drawing maps to it.
pub fn compile(config: &CompileConfig) -> Result<CompiledFont, Error> {
    let sources = source::glyph_sources(&config.source_dir)?;
    info!(
        "Compiling {} glyphs from {:?}",
        sources.len(),
        config.source_dir
    );

    let static_metadata = StaticMetadata::new(config);
    let mut ir = IconIr::new(static_metadata);
    ir.insert(Glyph::new(
        config.bootstrap_char.into(),
        config.bootstrap_char,
        BezPath::new(),
        config.padding_units,
    ));
    for glyph_source in &sources {
        let codepoint = names::char_for_name(glyph_source.name.as_str())
            .ok_or_else(|| iconir::error::Error::UnmappableName(glyph_source.name.clone()))?;
        let glyph_outline =
            outline::import_outline(&glyph_source.path, config.units_per_em, config.ascender)?;
        ir.insert(Glyph::new(
            glyph_source.name.clone(),
            codepoint,
            glyph_outline,
            config.padding_units,
        ));
    }

    let glyphs = glyphs::create_glyphs(&ir)?;
    let glyf_loca = glyphs::glue_glyf_loca(&glyphs)?;
    let metrics = metrics_and_limits::create_metrics(&glyphs, config.ascender, config.descender)?;
    let tables = TableSet {
        cmap: cmap::create_cmap(&ir)?,
        head: head::create_head(config.units_per_em, glyf_loca.format, metrics.bbox)?,
        name: name::create_name(&ir.static_metadata)?,
        os2: os2::create_os2(&ir, &glyphs, metrics.bbox)?,
        post: post::create_post(&ir)?,
        glyf: glyf_loca.glyf,
        loca: glyf_loca.raw_loca,
        hhea: metrics.hhea,
        hmtx: metrics.hmtx,
        maxp: metrics.maxp,
    };
    let ttf = font::assemble(&tables);
    let woff = woff::wrap(&ttf)?;
    Ok(CompiledFont { ttf, woff })
}

/// Compile and write `glyphs.ttf` and `glyphs.woff` to the output directory.
///
/// Nothing lands on disk unless the whole compile succeeded.
pub fn compile_and_write(config: &CompileConfig) -> Result<(), Error> {
    let compiled = compile(config)?;
    require_dir(&config.output_dir)?;
    for (file_name, bytes) in [(TTF_FILE, &compiled.ttf), (WOFF_FILE, &compiled.woff)] {
        let path = config.output_dir.join(file_name);
        fs::write(&path, bytes).map_err(|source| Error::FileIo {
            path: path.clone(),
            source,
        })?;
        info!("Wrote {} bytes to {path:?}", bytes.len());
    }
    Ok(())
}

fn require_dir(dir: &Path) -> Result<(), Error> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::ExpectedDirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| Error::FileIo {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
