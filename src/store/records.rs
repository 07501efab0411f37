use super::{Employee, Error, Result};
use crate::{
    codec::from_wire,
    header::DbHeader,
    types::{RecordId, HEADER_SIZE, RECORD_SIZE},
};
use log::{debug, info, warn};
use std::{
    fmt,
    fs::File,
    io::{Read, Seek, SeekFrom},
};

/// All employees of one database file, in insertion order.
///
/// A record's index in this array is its ID. Records are only ever
/// appended or flagged as deleted, never removed, so IDs stay stable.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Employee>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeEntry<'a> {
    pub id: RecordId,
    pub employee: &'a Employee,
}

impl fmt::Display for EmployeeEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee {}: Name: {}, Address: {}, Hours: {}",
            self.id, self.employee.name, self.employee.address, self.employee.hours
        )
    }
}

impl RecordStore {
    pub fn load(file: &mut File, header: &DbHeader) -> Result<Self> {
        if header.count == 0 {
            debug!("No employees in the database.");
            return Ok(Self::default());
        }

        let expected = u64::from(header.count) * u64::from(RECORD_SIZE);

        file.seek(SeekFrom::Start(u64::from(HEADER_SIZE)))?;
        let mut bytes = Vec::with_capacity(expected as usize);
        file.by_ref().take(expected).read_to_end(&mut bytes)?;

        if (bytes.len() as u64) < expected {
            return Err(Error::Truncated {
                expected,
                actual: bytes.len(),
            });
        }

        let records = bytes
            .chunks_exact(RECORD_SIZE as usize)
            .enumerate()
            .map(|(id, chunk)| {
                from_wire(chunk).map_err(|source| Error::CorruptedRecord { id, source })
            })
            .collect::<Result<Vec<Employee>>>()?;

        info!("Loaded {} employees.", records.len());
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    pub fn list(&self) -> Vec<EmployeeEntry<'_>> {
        self.live().collect()
    }

    pub fn search(&self, name: &str) -> Vec<EmployeeEntry<'_>> {
        self.live()
            .filter(|entry| entry.employee.name.as_str() == name)
            .collect()
    }

    /// Parses `input` and appends the employee, bumping the header's count and
    /// filesize together. Nothing changes when parsing fails.
    pub fn append(&mut self, header: &mut DbHeader, input: &str) -> Result<RecordId> {
        let employee: Employee = input.parse()?;

        let count = header.count.checked_add(1).ok_or(Error::StoreFull {
            capacity: RecordId::from(u16::MAX),
        })?;

        header.set_count(count);
        self.records.push(employee);

        let id = self.records.len() - 1;
        debug!("Appended employee {}: {:?}", id, input);
        Ok(id)
    }

    pub fn delete(&mut self, header: &DbHeader, id: &str) -> Result<RecordId> {
        if header.count == 0 {
            return Err(Error::EmptyStore);
        }

        let invalid_id = || Error::InvalidId {
            id: id.to_owned(),
            count: header.count,
        };

        let index: RecordId = id.trim().parse().map_err(|_| invalid_id())?;
        if index >= usize::from(header.count) {
            return Err(invalid_id());
        }

        let employee = self.records.get_mut(index).ok_or_else(invalid_id)?;
        if employee.deleted {
            warn!("Employee {} is already deleted.", index);
        }
        employee.deleted = true;

        debug!("Deleted employee {}.", index);
        Ok(index)
    }

    fn live(&self) -> impl Iterator<Item = EmployeeEntry<'_>> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, employee)| !employee.deleted)
            .map(|(id, employee)| EmployeeEntry { id, employee })
    }
}
