use super::{
    file_ops::{create_db_file, open_db_file},
    Result,
};
use crate::{
    header::DbHeader,
    store::{EmployeeEntry, RecordStore},
    sync,
    types::RecordId,
};
use log::{debug, info, warn};
use std::{
    fs::{self, File},
    path::{Path, PathBuf},
};

/// An open database file together with its header and all of its records.
///
/// Mutations only touch memory; nothing reaches the file until [`Database::sync`].
/// The file is closed when the value is dropped.
pub struct Database {
    path: PathBuf,
    file: File,
    header: DbHeader,
    store: RecordStore,
}

impl Database {
    pub fn create(path: &Path) -> Result<Self> {
        let file = create_db_file(path)?;
        Self::create_with_file(path, file)
    }

    /// Writes the empty header through `file`. The file at `path` is removed
    /// again when that fails, so no headerless file is left behind.
    fn create_with_file(path: &Path, file: File) -> Result<Self> {
        let mut database = Self {
            path: path.to_owned(),
            file,
            header: DbHeader::create(),
            store: RecordStore::default(),
        };

        if let Err(e) = database.sync() {
            drop(database);
            if let Err(remove_error) = fs::remove_file(path) {
                warn!("Cannot remove {:?} after failed create: {}", path, remove_error);
            }
            return Err(e);
        }

        info!("Database created at: {:?}", path);
        Ok(database)
    }

    pub fn open(path: &Path) -> Result<Self> {
        let mut file = open_db_file(path)?;

        let header = DbHeader::validate(&mut file)?;
        let store = RecordStore::load(&mut file, &header)?;

        info!("Database opened at: {:?}", path);
        Ok(Self {
            path: path.to_owned(),
            file,
            header,
            store,
        })
    }

    pub fn add(&mut self, input: &str) -> Result<RecordId> {
        Ok(self.store.append(&mut self.header, input)?)
    }

    pub fn delete(&mut self, id: &str) -> Result<RecordId> {
        Ok(self.store.delete(&self.header, id)?)
    }

    pub fn list(&self) -> Vec<EmployeeEntry<'_>> {
        self.store.list()
    }

    pub fn search(&self, name: &str) -> Vec<EmployeeEntry<'_>> {
        self.store.search(name)
    }

    pub fn header(&self) -> &DbHeader {
        &self.header
    }

    pub fn sync(&mut self) -> Result<()> {
        debug!("Syncing database at: {:?}", self.path);
        sync::write_all(&mut self.file, &self.header, self.store.records())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{database::Error, header, store, types::HEADER_SIZE};
    type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

    #[test]
    fn create_should_write_valid_empty_database() -> Result<()> {
        //Arrange
        let temp_dir = tempfile::tempdir()?;
        let path = temp_dir.path().join("employees.db");

        //Act
        let database = Database::create(&path)?;

        //Assert
        assert_eq!(database.header().count, 0);
        assert_eq!(std::fs::metadata(&path)?.len(), u64::from(HEADER_SIZE));
        drop(database);
        let reopened = Database::open(&path)?;
        assert!(reopened.list().is_empty());
        Ok(())
    }

    #[test]
    fn create_should_fail_when_file_exists() -> Result<()> {
        //Arrange
        let temp_dir = tempfile::tempdir()?;
        let path = temp_dir.path().join("employees.db");
        Database::create(&path)?;

        //Act
        let result = Database::create(&path);

        //Assert
        assert!(matches!(result, Err(Error::FileExists(_))));
        Ok(())
    }

    #[test]
    fn create_should_remove_file_when_header_cannot_be_written() -> Result<()> {
        //Arrange
        let temp_dir = tempfile::tempdir()?;
        let path = temp_dir.path().join("employees.db");
        File::create(&path)?;
        let read_only = File::open(&path)?;

        //Act
        let result = Database::create_with_file(&path, read_only);

        //Assert
        assert!(matches!(result, Err(Error::Sync(_))));
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn synced_changes_should_survive_reopening() -> Result<()> {
        //Arrange
        let temp_dir = tempfile::tempdir()?;
        let path = temp_dir.path().join("employees.db");
        let mut database = Database::create(&path)?;
        database.add("Ann,1 Main St,40")?;
        database.add("Bo,2 Oak Ave,20")?;
        database.delete("0")?;

        //Act
        database.sync()?;
        drop(database);
        let reopened = Database::open(&path)?;

        //Assert
        assert_eq!(reopened.header().count, 2);
        let listed: Vec<String> = reopened.list().iter().map(|e| e.to_string()).collect();
        assert_eq!(
            listed,
            vec!["Employee 1: Name: Bo, Address: 2 Oak Ave, Hours: 20".to_string()]
        );
        Ok(())
    }

    #[test]
    fn unsynced_changes_should_not_reach_file() -> Result<()> {
        //Arrange
        let temp_dir = tempfile::tempdir()?;
        let path = temp_dir.path().join("employees.db");
        let mut database = Database::create(&path)?;
        let before = std::fs::read(&path)?;

        //Act
        database.add("Ann,1 Main St,40")?;
        drop(database);

        //Assert
        assert_eq!(std::fs::read(&path)?, before);
        Ok(())
    }

    #[test]
    fn open_should_reject_file_with_wrong_size() -> Result<()> {
        //Arrange
        let temp_dir = tempfile::tempdir()?;
        let path = temp_dir.path().join("employees.db");
        Database::create(&path)?;
        let mut bytes = std::fs::read(&path)?;
        bytes.push(0);
        std::fs::write(&path, bytes)?;

        //Act
        let result = Database::open(&path);

        //Assert
        assert!(matches!(
            result,
            Err(Error::Header(header::Error::CorruptedSize { .. }))
        ));
        Ok(())
    }

    #[test]
    fn delete_on_empty_database_should_report_empty_store() -> Result<()> {
        //Arrange
        let temp_dir = tempfile::tempdir()?;
        let mut database = Database::create(&temp_dir.path().join("employees.db"))?;

        //Act
        let result = database.delete("0");

        //Assert
        assert!(matches!(result, Err(Error::Store(store::Error::EmptyStore))));
        assert!(result.err().is_some_and(|e| e.is_empty_store()));
        Ok(())
    }
}
