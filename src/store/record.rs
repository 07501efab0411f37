use super::{Error, Result};
use crate::{
    codec::{self, FixedText},
    types::{Hours, ADDRESS_LEN, NAME_LEN},
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub name: FixedText<NAME_LEN>,
    pub address: FixedText<ADDRESS_LEN>,
    pub hours: Hours,
    pub deleted: bool,
}

impl Employee {
    #[cfg(test)]
    pub fn new(name: &str, address: &str, hours: Hours) -> Result<Self> {
        Ok(Self {
            name: text_field("name", name)?,
            address: text_field("address", address)?,
            hours,
            deleted: false,
        })
    }
}

/// Parses `name,address,hours`. Everything after the second comma is the
/// hours field.
impl FromStr for Employee {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let mut fields = input.splitn(3, ',');

        let (name, address, hours) = match (fields.next(), fields.next(), fields.next()) {
            (Some(name), Some(address), Some(hours)) => (name, address, hours),
            _ => return Err(Error::MalformedInput(input.to_owned())),
        };

        let name = text_field("name", name)?;
        let address = text_field("address", address)?;
        let hours = hours
            .trim()
            .parse::<Hours>()
            .map_err(|_| Error::InvalidHours(hours.to_owned()))?;

        Ok(Self {
            name,
            address,
            hours,
            deleted: false,
        })
    }
}

fn text_field<const N: usize>(field: &'static str, value: &str) -> Result<FixedText<N>> {
    FixedText::new(value).map_err(|source| match source {
        codec::Error::TextTooLong { len, capacity } => Error::FieldTooLong {
            field,
            len,
            limit: capacity - 1,
        },
        source => Error::InvalidField { field, source },
    })
}
