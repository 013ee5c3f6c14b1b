//! Back end of the icon font compiler.
//!
//! Builds binary OpenType tables from the front end's IR, one module per
//! table, then glues them into an sfnt and wraps that in a WOFF container.

pub mod cmap;
pub mod error;
pub mod font;
pub mod glyphs;
pub mod head;
pub mod metrics_and_limits;
pub mod name;
pub mod os2;
pub mod post;
pub mod woff;
