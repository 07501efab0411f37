pub const HEADER_MAGIC: u32 = 0x4c4c_4144;
pub const DB_VERSION: u16 = 1;

pub const NAME_LEN: usize = 256;
pub const ADDRESS_LEN: usize = 256;

// magic u32 + version u16 + count u16 + filesize u32
pub const HEADER_SIZE: u32 = 12;
// name + address + hours i32 + deleted bool
pub const RECORD_SIZE: u32 = (NAME_LEN + ADDRESS_LEN + 4 + 1) as u32;

pub type RecordId = usize;
pub type Hours = i32;
