use std::{
    fs::{File, OpenOptions},
    io,
    path::Path,
};

use crate::database::{Error, Result};

pub fn create_db_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| match source.kind() {
            io::ErrorKind::AlreadyExists => Error::FileExists(path.to_owned()),
            _ => Error::Open {
                path: path.to_owned(),
                source,
            },
        })
}

pub fn open_db_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(|source| Error::Open {
            path: path.to_owned(),
            source,
        })
}
