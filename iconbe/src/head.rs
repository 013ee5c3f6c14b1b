//! Generates a [head](https://learn.microsoft.com/en-us/typography/opentype/spec/head) table.

use std::env;

use chrono::{DateTime, TimeZone, Utc};
use log::warn;
use write_fonts::{
    dump_table,
    tables::{glyf::Bbox, head::Head},
    types::{LongDateTime, Tag},
};

use crate::{error::Error, glyphs::LocaFormat};

// The TrueType epoch (1st January 1904) as a Unix timestamp.
// Equivalent to Utc.with_ymd_and_hms(1904, 1, 1, 0, 0, 0).unwrap().timestamp()
const MACINTOSH_EPOCH: i64 = -2082844800;

fn timestamp_since_mac_epoch(datetime: DateTime<Utc>) -> i64 {
    let mac_epoch = Utc.timestamp_opt(MACINTOSH_EPOCH, 0).unwrap();
    datetime.signed_duration_since(mac_epoch).num_seconds()
}

/// The number of seconds since 00:00 1904-01-01 (GMT/UTC).
///
/// If the [SOURCE_DATE_EPOCH](https://reproducible-builds.org/specs/source-date-epoch/)
/// environment variable is set, use that instead of the current time.
fn current_timestamp() -> i64 {
    let mut src_date = None;
    if let Ok(src_date_var) = env::var("SOURCE_DATE_EPOCH") {
        if let Ok(timestamp) = src_date_var.parse::<i64>() {
            src_date = Utc.timestamp_opt(timestamp, 0).single();
        };
        if src_date.is_none() {
            warn!(
                "Invalid SOURCE_DATE_EPOCH value: {:?}. Falling back to Utc::now().",
                src_date_var
            );
        }
    }
    timestamp_since_mac_epoch(src_date.unwrap_or_else(Utc::now))
}

fn build_head(units_per_em: u16, loca_format: LocaFormat, bbox: Bbox) -> Head {
    let now = LongDateTime::new(current_timestamp());
    Head {
        units_per_em,
        created: now,
        modified: now,
        x_min: bbox.x_min,
        y_min: bbox.y_min,
        x_max: bbox.x_max,
        y_max: bbox.y_max,
        index_to_loc_format: match loca_format {
            LocaFormat::Short => 0,
            LocaFormat::Long => 1,
        },
        ..Default::default()
    }
}

/// Generate [head](https://learn.microsoft.com/en-us/typography/opentype/spec/head)
///
/// The checksum adjustment is left zero; the final table merge fills it in.
pub fn create_head(
    units_per_em: u16,
    loca_format: LocaFormat,
    bbox: Option<Bbox>,
) -> Result<Vec<u8>, Error> {
    let head = build_head(units_per_em, loca_format, bbox.unwrap_or_default());
    dump_table(&head).map_err(|source| Error::DumpTableError {
        table: Tag::new(b"head"),
        source,
    })
}
