use super::{Error, Result};
use serde::{
    de::{self, SeqAccess, Visitor},
    ser::SerializeTuple,
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::fmt;

/// Text stored inline in exactly `N` bytes, NUL padded.
///
/// At least one byte is always left for the terminating NUL, so the longest
/// accepted text is `N - 1` bytes. Oversized input is rejected, never cut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedText<const N: usize>(String);

impl<const N: usize> FixedText<N> {
    pub fn new(text: &str) -> Result<Self> {
        if text.len() >= N {
            return Err(Error::TextTooLong {
                len: text.len(),
                capacity: N,
            });
        }
        if text.contains('\0') {
            return Err(Error::EmbeddedNul);
        }
        Ok(Self(text.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<const N: usize> fmt::Display for FixedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<const N: usize> Serialize for FixedText<N> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let bytes = self.0.as_bytes();
        let mut tuple = serializer.serialize_tuple(N)?;
        for i in 0..N {
            tuple.serialize_element(bytes.get(i).unwrap_or(&0))?;
        }
        tuple.end()
    }
}

struct FixedTextVisitor<const N: usize>;

impl<'de, const N: usize> Visitor<'de> for FixedTextVisitor<N> {
    type Value = FixedText<N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} NUL padded bytes", N)
    }

    fn visit_seq<A>(self, mut seq: A) -> core::result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut bytes = Vec::with_capacity(N);
        for i in 0..N {
            let byte: u8 = seq
                .next_element()?
                .ok_or_else(|| <A::Error as de::Error>::invalid_length(i, &self))?;
            bytes.push(byte);
        }

        let end = bytes
            .iter()
            .position(|&byte| byte == 0)
            .ok_or_else(|| {
                <A::Error as de::Error>::custom("text field is not NUL terminated")
            })?;
        bytes.truncate(end);

        let text = String::from_utf8(bytes).map_err(<A::Error as de::Error>::custom)?;
        Ok(FixedText(text))
    }
}

impl<'de, const N: usize> Deserialize<'de> for FixedText<N> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_tuple(N, FixedTextVisitor::<N>)
    }
}
