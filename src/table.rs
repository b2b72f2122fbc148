// Copyright (c) 2021 Thomas J. Otterson
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

//! The complete 64k truth table of the PLA.
//!
//! The table is laid out the way the well-known `pla.c` dump lays it out: one byte per
//! input value, in input order, with output *n* in bit *n* of each byte. A table file in
//! that format can be loaded and checked against the equations here, and the table can be
//! written back out in the same format.

use std::io::{self, Read, Write};

use log::{info, warn};
use thiserror::Error;

use crate::{
    equations::evaluate,
    signals::{InputVector, OutputVector},
};

/// The number of entries in a table, one for every possible input vector.
pub const TABLE_SIZE: usize = 1 << 16;

const FNV_OFFSET: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("table has {actual} bytes, expected 65536")]
    Length { actual: usize },

    #[error(
        "output mismatch for input {input:#06x}: expected {expected:08b}, table has {actual:08b}"
    )]
    Mismatch { input: u16, expected: u8, actual: u8 },
}

/// One output byte for each of the 65536 possible input vectors.
#[derive(Clone, PartialEq, Eq)]
pub struct TruthTable {
    entries: Vec<u8>,
}

impl TruthTable {
    /// Builds the table by evaluating every input vector.
    pub fn generate() -> TruthTable {
        let entries = (0..=u16::MAX)
            .map(|value| evaluate(InputVector::new(value)).value())
            .collect::<Vec<u8>>();
        info!("Generated PLA truth table ({} entries)", entries.len());
        TruthTable { entries }
    }

    /// Wraps raw table bytes. There must be exactly one byte per input vector.
    pub fn from_bytes(entries: Vec<u8>) -> Result<TruthTable, TableError> {
        if entries.len() != TABLE_SIZE {
            return Err(TableError::Length {
                actual: entries.len(),
            });
        }
        Ok(TruthTable { entries })
    }

    /// Reads a table from a reader. At most one byte past a full table is consumed, so an
    /// oversized or endless source is rejected as soon as it runs long.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<TruthTable, TableError> {
        let mut entries = Vec::with_capacity(TABLE_SIZE + 1);
        reader
            .take(TABLE_SIZE as u64 + 1)
            .read_to_end(&mut entries)?;
        let table = TruthTable::from_bytes(entries)?;
        info!("Loaded PLA truth table");
        Ok(table)
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), TableError> {
        writer.write_all(&self.entries)?;
        writer.flush()?;
        Ok(())
    }

    pub fn get(&self, input: InputVector) -> OutputVector {
        OutputVector::new(self.entries[input.value() as usize])
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.entries
    }

    /// Checks every entry against the equations, failing on the first one that disagrees.
    pub fn verify(&self) -> Result<(), TableError> {
        for (value, actual) in self.entries.iter().enumerate() {
            let input = value as u16;
            let expected = evaluate(InputVector::new(input)).value();
            if expected != *actual {
                warn!(
                    "PLA truth table disagrees at input {:016b}: expected {:08b}, found {:08b}",
                    input, expected, actual
                );
                return Err(TableError::Mismatch {
                    input,
                    expected,
                    actual: *actual,
                });
            }
        }
        info!("PLA truth table verified");
        Ok(())
    }

    /// For each output in bit order, the number of input vectors that drive it low.
    pub fn low_counts(&self) -> [u32; 8] {
        let mut counts = [0; 8];
        for entry in self.entries.iter() {
            for (i, count) in counts.iter_mut().enumerate() {
                if (entry >> i) & 1 == 0 {
                    *count += 1;
                }
            }
        }
        counts
    }

    /// A 32-bit FNV-1a hash of the table bytes, for telling two tables apart at a glance.
    pub fn checksum(&self) -> u32 {
        self.entries.iter().fold(FNV_OFFSET, |hash, byte| {
            (hash ^ *byte as u32).wrapping_mul(FNV_PRIME)
        })
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use crate::{signals::Output, test_utils::expected_outputs};

    use super::*;

    #[test]
    fn generated_table_verifies() {
        let table = TruthTable::generate();
        assert_eq!(table.as_bytes().len(), TABLE_SIZE);
        assert!(table.verify().is_ok());
    }

    #[test]
    fn generated_table_matches_reference() {
        let table = TruthTable::generate();
        for value in 0..=0xffff {
            assert_eq!(
                table.get(InputVector::new(value)).value(),
                expected_outputs(value),
                "at input {:016b}",
                value
            );
        }
    }

    #[test]
    fn known_entries() {
        let table = TruthTable::generate();
        assert_eq!(table.get(InputVector::new(0x0000)).value(), 0xfe);
        assert_eq!(table.get(InputVector::new(0x1234)).value(), 0xbf);
        assert_eq!(table.get(InputVector::new(0xa5a5)).value(), 0xff);
        assert_eq!(table.get(InputVector::new(0xffff)).value(), 0xff);
        assert!(table
            .get(InputVector::new(0x1234))
            .selected(Output::Roml));
    }

    #[test]
    fn low_counts_match_reference() {
        let table = TruthTable::generate();
        assert_eq!(
            table.low_counts(),
            [23400, 256, 768, 3328, 512, 816, 1280, 3328]
        );
    }

    #[test]
    fn checksum_matches_reference() {
        assert_eq!(TruthTable::generate().checksum(), 0xe608_b485);
    }

    #[test]
    fn written_table_reads_back() {
        let table = TruthTable::generate();
        let mut buffer: Vec<u8> = Vec::new();
        table.write_to(&mut buffer).unwrap();
        assert_eq!(buffer.len(), TABLE_SIZE);

        let loaded = TruthTable::read_from(&mut Cursor::new(buffer)).unwrap();
        assert!(loaded == table);
    }

    #[test]
    fn short_table_is_rejected() {
        let result = TruthTable::read_from(&mut Cursor::new(vec![0xffu8; 1024]));
        match result {
            Err(TableError::Length { actual }) => assert_eq!(actual, 1024),
            _ => panic!("expected a length error"),
        }
    }

    struct CountingReader<R> {
        inner: R,
        consumed: usize,
    }

    impl<R: Read> Read for CountingReader<R> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.inner.read(buf)?;
            self.consumed += n;
            Ok(n)
        }
    }

    #[test]
    fn long_table_is_rejected_early() {
        let mut reader = CountingReader {
            inner: io::repeat(0).take(16 * TABLE_SIZE as u64),
            consumed: 0,
        };
        let result = TruthTable::read_from(&mut reader);
        match result {
            Err(TableError::Length { actual }) => assert_eq!(actual, TABLE_SIZE + 1),
            _ => panic!("expected a length error"),
        }
        assert!(reader.consumed <= TABLE_SIZE + 1);
    }

    #[test]
    fn corrupted_entry_is_reported() {
        let mut bytes = TruthTable::generate().as_bytes().to_vec();
        bytes[0x3aae] ^= 0b0000_0010;
        let table = TruthTable::from_bytes(bytes).unwrap();

        match table.verify() {
            Err(TableError::Mismatch {
                input,
                expected,
                actual,
            }) => {
                assert_eq!(input, 0x3aae);
                assert_eq!(expected, 0xfd);
                assert_eq!(actual, 0xff);
            }
            other => panic!("expected a mismatch, got {:?}", other),
        }
    }

    #[test]
    fn errors_display() {
        let error = TableError::Length { actual: 12 };
        assert_eq!(error.to_string(), "table has 12 bytes, expected 65536");

        let error = TableError::Mismatch {
            input: 0x3aae,
            expected: 0xfd,
            actual: 0xff,
        };
        assert_eq!(
            error.to_string(),
            "output mismatch for input 0x3aae: expected 11111101, table has 11111111"
        );
    }
}
