mod error;
mod fixed_text;
mod wire;

pub use error::{Error, Result};
pub use fixed_text::FixedText;
pub use wire::{from_wire, to_wire};

#[cfg(test)]
pub use wire::wire_size;
