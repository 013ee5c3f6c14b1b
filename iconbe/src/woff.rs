//! WOFF 1.0 packaging of a compiled font.
//!
//! write-fonts stops at the sfnt, so the container layer follows the W3C
//! WOFF File Format 1.0 spec directly: a 44 byte header, a directory
//! mirroring the sfnt table directory, then zlib-compressed table data.

use std::io::Write;

use flate2::{write::ZlibEncoder, Compression};
use log::debug;
use write_fonts::{read::FontRef, types::Tag};

use crate::error::Error;

const SIGNATURE: &[u8; 4] = b"wOFF";
const HEADER_SIZE: u32 = 44;
const DIRECTORY_ENTRY_SIZE: u32 = 20;

fn align4(len: u32) -> u32 {
    (len + 3) & !3
}

struct WoffTable {
    tag: Tag,
    orig_checksum: u32,
    orig_length: u32,
    /// Compressed, unless compression didn't shrink the table.
    data: Vec<u8>,
}

/// Wrap a compiled sfnt in a WOFF 1.0 container.
///
/// The table directory keeps the sfnt's order and checksums, so the wrapped
/// font reconstitutes to exactly the TTF it was built from.
pub fn wrap(sfnt: &[u8]) -> Result<Vec<u8>, Error> {
    let font = FontRef::new(sfnt).map_err(Error::ReadFont)?;
    let directory = &font.table_directory;
    let num_tables = directory.table_records().len() as u16;

    // the sfnt size a decoder would reconstitute: directory plus padded tables
    let mut total_sfnt_size = 12 + 16 * num_tables as u32;
    let mut tables = Vec::with_capacity(num_tables as usize);
    for record in directory.table_records() {
        let tag = record.tag();
        let table_data = font.table_data(tag).ok_or(Error::MissingTable(tag))?;
        let raw = table_data.as_bytes();
        total_sfnt_size += align4(raw.len() as u32);

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
        encoder.write_all(raw)?;
        let compressed = encoder.finish()?;
        // a table that doesn't shrink is stored raw, per spec
        let data = if compressed.len() < raw.len() {
            compressed
        } else {
            raw.to_vec()
        };
        debug!(
            "Packing {tag}: {} bytes -> {} bytes",
            raw.len(),
            data.len()
        );
        tables.push(WoffTable {
            tag,
            orig_checksum: record.checksum(),
            orig_length: raw.len() as u32,
            data,
        });
    }

    let mut offset = HEADER_SIZE + DIRECTORY_ENTRY_SIZE * num_tables as u32;
    let offsets: Vec<u32> = tables
        .iter()
        .map(|table| {
            let this = offset;
            offset += align4(table.data.len() as u32);
            this
        })
        .collect();
    let total_length = offset;

    let mut woff = Vec::with_capacity(total_length as usize);
    woff.extend(SIGNATURE);
    woff.extend(directory.sfnt_version().to_be_bytes()); // flavor
    woff.extend(total_length.to_be_bytes());
    woff.extend(num_tables.to_be_bytes());
    woff.extend(0u16.to_be_bytes()); // reserved
    woff.extend(total_sfnt_size.to_be_bytes());
    woff.extend(1u16.to_be_bytes()); // majorVersion
    woff.extend(0u16.to_be_bytes()); // minorVersion
    woff.extend([0u8; 20]); // no metadata or private blocks

    for (table, table_offset) in tables.iter().zip(&offsets) {
        woff.extend(table.tag.to_be_bytes());
        woff.extend(table_offset.to_be_bytes());
        woff.extend((table.data.len() as u32).to_be_bytes());
        woff.extend(table.orig_length.to_be_bytes());
        woff.extend(table.orig_checksum.to_be_bytes());
    }

    for table in &tables {
        woff.extend(&table.data);
        while woff.len() % 4 != 0 {
            woff.push(0);
        }
    }
    debug_assert_eq!(total_length as usize, woff.len());

    Ok(woff)
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use flate2::read::ZlibDecoder;
    use write_fonts::FontBuilder;

    use super::*;

    fn read_u16(buf: &[u8], at: usize) -> u16 {
        u16::from_be_bytes(buf[at..at + 2].try_into().unwrap())
    }

    fn read_u32(buf: &[u8], at: usize) -> u32 {
        u32::from_be_bytes(buf[at..at + 4].try_into().unwrap())
    }

    fn tiny_sfnt() -> Vec<u8> {
        let mut builder = FontBuilder::default();
        let compressible = vec![7u8; 512];
        builder.add_raw(Tag::new(b"aaaa"), compressible);
        builder.add_raw(Tag::new(b"bbbb"), vec![1, 2, 3, 4]);
        builder.build()
    }

    #[test]
    fn header_describes_the_sfnt() {
        let sfnt = tiny_sfnt();
        let woff = wrap(&sfnt).unwrap();

        assert_eq!(b"wOFF", &woff[0..4]);
        assert_eq!(read_u32(&sfnt, 0), read_u32(&woff, 4)); // flavor
        assert_eq!(woff.len() as u32, read_u32(&woff, 8));
        assert_eq!(2, read_u16(&woff, 12)); // numTables
        assert_eq!(0, read_u16(&woff, 14)); // reserved
        let total_sfnt_size = 12 + 2 * 16 + 512 + 4;
        assert_eq!(total_sfnt_size, read_u32(&woff, 16));
    }

    #[test]
    fn tables_round_trip_through_compression() {
        let sfnt = tiny_sfnt();
        let woff = wrap(&sfnt).unwrap();

        let font = FontRef::new(&sfnt).unwrap();
        for (i, record) in font.table_directory.table_records().iter().enumerate() {
            let entry_at = 44 + 20 * i;
            assert_eq!(
                record.tag().to_be_bytes(),
                woff[entry_at..entry_at + 4],
                "tag {i}"
            );
            let offset = read_u32(&woff, entry_at + 4) as usize;
            let comp_length = read_u32(&woff, entry_at + 8) as usize;
            let orig_length = read_u32(&woff, entry_at + 12) as usize;
            assert_eq!(record.checksum(), read_u32(&woff, entry_at + 16));

            let stored = &woff[offset..offset + comp_length];
            let original = font.table_data(record.tag()).unwrap();
            let expected = original.as_bytes();
            assert_eq!(orig_length, expected.len());
            if comp_length < orig_length {
                let mut decompressed = Vec::new();
                ZlibDecoder::new(stored)
                    .read_to_end(&mut decompressed)
                    .unwrap();
                assert_eq!(expected, decompressed, "table {i}");
            } else {
                assert_eq!(expected, stored, "table {i}");
            }
        }
    }
}
