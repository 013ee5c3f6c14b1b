//! Front end of the icon font compiler.
//!
//! Turns a directory of SVG glyph drawings into an intermediate
//! representation: font-wide metadata plus one outline per mapped character,
//! already in font units. The back end (iconbe) consumes this to build
//! binary tables.

pub mod config;
pub mod error;
pub mod ir;
pub mod names;
pub mod outline;
pub mod source;
pub mod types;
