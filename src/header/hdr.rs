use super::{Error, Result};
use crate::{
    codec::{from_wire, to_wire},
    types::{DB_VERSION, HEADER_MAGIC, HEADER_SIZE, RECORD_SIZE},
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{Read, Seek, SeekFrom},
};

/// Metadata block at offset 0 of every database file.
///
/// `filesize` must always equal `HEADER_SIZE + count * RECORD_SIZE`; use
/// [`DbHeader::set_count`] to change the count so both move together.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DbHeader {
    pub magic: u32,
    pub version: u16,
    pub count: u16,
    pub filesize: u32,
}

impl DbHeader {
    pub fn create() -> Self {
        Self {
            magic: HEADER_MAGIC,
            version: DB_VERSION,
            count: 0,
            filesize: HEADER_SIZE,
        }
    }

    /// Reads the header from the start of `file` and checks magic, version
    /// and declared size against the real file length, in that order.
    pub fn validate(file: &mut File) -> Result<Self> {
        file.seek(SeekFrom::Start(0))?;

        let mut bytes = Vec::with_capacity(HEADER_SIZE as usize);
        file.by_ref()
            .take(u64::from(HEADER_SIZE))
            .read_to_end(&mut bytes)?;

        if bytes.len() < HEADER_SIZE as usize {
            return Err(Error::Truncated {
                expected: HEADER_SIZE,
                actual: bytes.len(),
            });
        }

        let header: DbHeader = from_wire(&bytes)?;

        if header.magic != HEADER_MAGIC {
            return Err(Error::InvalidMagic {
                found: header.magic,
            });
        }

        if header.version != DB_VERSION {
            return Err(Error::UnsupportedVersion {
                found: header.version,
                supported: DB_VERSION,
            });
        }

        let actual = file.metadata()?.len();
        if u64::from(header.filesize) != actual {
            return Err(Error::CorruptedSize {
                declared: header.filesize,
                actual,
            });
        }

        debug!(
            "Header validated: version: {}, count: {}, filesize: {}",
            header.version, header.count, header.filesize
        );

        Ok(header)
    }

    pub fn serialize(&self) -> Result<Vec<u8>> {
        Ok(to_wire(self)?)
    }

    pub fn set_count(&mut self, count: u16) {
        self.count = count;
        self.filesize = Self::expected_filesize(count);
    }

    pub fn expected_filesize(count: u16) -> u32 {
        HEADER_SIZE + u32::from(count) * RECORD_SIZE
    }

    pub fn is_consistent(&self) -> bool {
        self.filesize == Self::expected_filesize(self.count)
    }
}
