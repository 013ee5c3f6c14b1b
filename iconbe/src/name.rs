//! Generates a [name](https://learn.microsoft.com/en-us/typography/opentype/spec/name) table.

use iconir::ir::StaticMetadata;
use write_fonts::{
    dump_table,
    tables::name::{Name, NameRecord},
    types::{NameId, Tag},
    OffsetMarker,
};

use crate::error::Error;

// Windows platform, Unicode BMP encoding, US English
const PLATFORM_ID: u16 = 3;
const ENCODING_ID: u16 = 1;
const LANGUAGE_ID: u16 = 0x409;

/// Generate [name](https://learn.microsoft.com/en-us/typography/opentype/spec/name)
pub fn create_name(static_metadata: &StaticMetadata) -> Result<Vec<u8>, Error> {
    let strings = [
        (NameId::FAMILY_NAME, static_metadata.family_name.clone()),
        (NameId::SUBFAMILY_NAME, "Regular".to_string()),
        (
            NameId::UNIQUE_ID,
            format!(
                "{};{}",
                static_metadata.version, static_metadata.font_name
            ),
        ),
        (NameId::FULL_NAME, static_metadata.full_name.clone()),
        (NameId::VERSION_STRING, static_metadata.version.clone()),
        (NameId::POSTSCRIPT_NAME, static_metadata.font_name.clone()),
    ];

    let name_records = strings
        .into_iter()
        .map(|(name_id, value)| NameRecord {
            name_id,
            platform_id: PLATFORM_ID,
            encoding_id: ENCODING_ID,
            language_id: LANGUAGE_ID,
            string: OffsetMarker::new(value),
        })
        .collect::<Vec<_>>();

    let name = Name::new(name_records.into_iter().collect());
    dump_table(&name).map_err(|source| Error::DumpTableError {
        table: Tag::new(b"name"),
        source,
    })
}
