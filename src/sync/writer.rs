use super::{Error, Result};
use crate::{codec::to_wire, header::DbHeader, store::Employee};
use log::info;
use std::{
    fs::File,
    io::{BufWriter, Seek, SeekFrom, Write},
};

/// Rewrites the whole file from offset 0: header first, then every record in
/// order. The file is cut to `header.filesize` afterwards so stale bytes
/// never survive.
pub fn write_all(file: &mut File, header: &DbHeader, records: &[Employee]) -> Result<()> {
    if usize::from(header.count) != records.len() {
        return Err(Error::CountMismatch {
            count: header.count,
            records: records.len(),
        });
    }

    if !header.is_consistent() {
        return Err(Error::InconsistentSize {
            declared: header.filesize,
            count: header.count,
            expected: DbHeader::expected_filesize(header.count),
        });
    }

    file.seek(SeekFrom::Start(0))?;

    let mut writer = BufWriter::new(&*file);
    writer.write_all(&header.serialize()?)?;
    for record in records {
        writer.write_all(&to_wire(record)?)?;
    }
    writer.flush()?;
    drop(writer);

    file.set_len(u64::from(header.filesize))?;
    file.sync_all()?;

    info!(
        "Database synced: {} employees, {} bytes.",
        header.count, header.filesize
    );
    Ok(())
}
