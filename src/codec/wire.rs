//! Network byte order encoding for everything that lands on disk.
//!
//! All integers are written fixed-width and big-endian, structs are written
//! field after field without length prefixes, so a value's wire size depends
//! only on its type.

use super::{Error, Result};
use bincode::{ErrorKind, Options};
use serde::{de::DeserializeOwned, Serialize};
use std::io;

fn wire_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_big_endian()
}

pub fn to_wire<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    Ok(wire_options().serialize(value)?)
}

pub fn from_wire<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    wire_options().deserialize(bytes).map_err(classify)
}

#[cfg(test)]
pub fn wire_size<T: Serialize>(value: &T) -> Result<u64> {
    Ok(wire_options().serialized_size(value)?)
}

fn classify(error: bincode::Error) -> Error {
    if let ErrorKind::Io(source) = error.as_ref() {
        if source.kind() == io::ErrorKind::UnexpectedEof {
            return Error::UnexpectedEof;
        }
    }
    Error::Serialization(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

    #[test]
    fn integers_should_be_encoded_in_network_byte_order() -> Result<()> {
        assert_eq!(to_wire(&0x0102u16)?, vec![0x01, 0x02]);
        assert_eq!(to_wire(&0x0102_0304u32)?, vec![0x01, 0x02, 0x03, 0x04]);
        assert_eq!(to_wire(&-2i32)?, vec![0xff, 0xff, 0xff, 0xfe]);
        Ok(())
    }

    #[test]
    fn from_wire_should_decode_network_byte_order() -> Result<()> {
        let value: u32 = from_wire(&[0x4c, 0x4c, 0x41, 0x44])?;

        assert_eq!(value, 0x4c4c_4144);
        Ok(())
    }

    #[test]
    fn from_wire_should_report_unexpected_eof_for_short_input() {
        let result = from_wire::<u32>(&[0x00, 0x01]);

        assert!(matches!(result, Err(Error::UnexpectedEof)));
    }

    #[test]
    fn wire_size_should_not_depend_on_value() -> Result<()> {
        assert_eq!(wire_size(&0u32)?, 4);
        assert_eq!(wire_size(&u32::MAX)?, 4);
        assert_eq!(wire_size(&true)?, 1);
        Ok(())
    }
}
