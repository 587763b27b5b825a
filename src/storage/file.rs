//! Storage in a directory on disk.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Result, WordForestError};
use crate::storage::traits::{Storage, StorageConfig, StorageError, StorageInput, StorageOutput};

/// Files kept directly inside one directory, created on demand.
#[derive(Debug)]
pub struct FileStorage {
    directory: PathBuf,
    config: StorageConfig,
}

impl FileStorage {
    pub fn new<P: AsRef<Path>>(directory: P, config: StorageConfig) -> Result<Self> {
        let directory = directory.as_ref().to_path_buf();

        fs::create_dir_all(&directory).map_err(|e| {
            WordForestError::storage(format!("Cannot create {}: {e}", directory.display()))
        })?;
        if !directory.is_dir() {
            return Err(WordForestError::storage(format!(
                "{} is not a directory",
                directory.display()
            )));
        }

        Ok(FileStorage { directory, config })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path(&self, name: &str) -> PathBuf {
        self.directory.join(name)
    }
}

impl Storage for FileStorage {
    fn open_input(&self, name: &str) -> Result<Box<dyn StorageInput>> {
        let file = File::open(self.path(name)).map_err(|e| StorageError::from_io(name, &e))?;
        let size = file
            .metadata()
            .map_err(|e| StorageError::from_io(name, &e))?
            .len();

        Ok(Box::new(FileInput {
            reader: BufReader::with_capacity(self.config.buffer_size, file),
            size,
        }))
    }

    fn create_output(&self, name: &str) -> Result<Box<dyn StorageOutput>> {
        let file = File::create(self.path(name)).map_err(|e| StorageError::from_io(name, &e))?;

        Ok(Box::new(FileOutput {
            name: name.to_string(),
            writer: BufWriter::with_capacity(self.config.buffer_size, file),
            position: 0,
            sync_on_close: self.config.sync_on_close,
            closed: false,
        }))
    }

    fn file_exists(&self, name: &str) -> bool {
        self.path(name).is_file()
    }

    fn delete_file(&self, name: &str) -> Result<()> {
        match fs::remove_file(self.path(name)) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
                Err(StorageError::from_io(name, &e).into())
            }
            _ => Ok(()),
        }
    }

    fn rename_file(&self, from: &str, to: &str) -> Result<()> {
        fs::rename(self.path(from), self.path(to)).map_err(|e| StorageError::from_io(from, &e))?;
        debug!("Renamed {from} to {to} in {}", self.directory.display());
        Ok(())
    }

    #[cfg(unix)]
    fn sync(&self) -> Result<()> {
        let dir_name = self.directory.display().to_string();
        File::open(&self.directory)
            .and_then(|dir| dir.sync_all())
            .map_err(|e| StorageError::from_io(&dir_name, &e).into())
    }

    #[cfg(not(unix))]
    fn sync(&self) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug)]
struct FileInput {
    reader: BufReader<File>,
    size: u64,
}

impl Read for FileInput {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.reader.read(buf)
    }
}

impl StorageInput for FileInput {
    fn size(&self) -> u64 {
        self.size
    }
}

#[derive(Debug)]
struct FileOutput {
    name: String,
    writer: BufWriter<File>,
    position: u64,
    sync_on_close: bool,
    closed: bool,
}

impl Write for FileOutput {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if self.closed {
            return Err(std::io::Error::other(StorageError::Closed(self.name.clone())));
        }
        let written = self.writer.write(buf)?;
        self.position += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

impl StorageOutput for FileOutput {
    fn position(&self) -> u64 {
        self.position
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.writer
            .flush()
            .map_err(|e| StorageError::from_io(&self.name, &e))?;
        if self.sync_on_close {
            self.writer
                .get_ref()
                .sync_all()
                .map_err(|e| StorageError::from_io(&self.name, &e))?;
        }
        self.closed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage() -> (TempDir, FileStorage) {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path(), StorageConfig::default()).unwrap();
        (dir, storage)
    }

    fn write(storage: &FileStorage, name: &str, data: &[u8]) {
        let mut output = storage.create_output(name).unwrap();
        output.write_all(data).unwrap();
        assert_eq!(output.position(), data.len() as u64);
        output.close().unwrap();
    }

    fn read(storage: &FileStorage, name: &str) -> Vec<u8> {
        let mut input = storage.open_input(name).unwrap();
        let mut data = Vec::new();
        input.read_to_end(&mut data).unwrap();
        assert_eq!(input.size(), data.len() as u64);
        data
    }

    #[test]
    fn test_creates_nested_data_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("data").join("forest");
        let storage = FileStorage::new(&nested, StorageConfig::default()).unwrap();

        assert!(nested.is_dir());
        assert_eq!(storage.directory(), nested.as_path());
    }

    #[test]
    fn test_rejects_plain_file_as_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words");
        fs::write(&path, "cat\n").unwrap();

        assert!(FileStorage::new(&path, StorageConfig::default()).is_err());
    }

    #[test]
    fn test_write_then_read() {
        let (_dir, storage) = storage();
        write(&storage, "wordForest.json", b"{\"version\":1}");

        assert!(storage.file_exists("wordForest.json"));
        assert_eq!(read(&storage, "wordForest.json"), b"{\"version\":1}");
    }

    #[test]
    fn test_rename_replaces_target() {
        let (_dir, storage) = storage();
        write(&storage, "wordForest.json", b"old");

        let (temp_name, mut output) = storage.create_temp_output("wordForest").unwrap();
        assert_eq!(temp_name, "wordForest_0.tmp");
        output.write_all(b"fresh").unwrap();
        output.close().unwrap();

        storage.rename_file(&temp_name, "wordForest.json").unwrap();
        storage.sync().unwrap();

        assert_eq!(read(&storage, "wordForest.json"), b"fresh");
        assert!(!storage.file_exists(&temp_name));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let (_dir, storage) = storage();
        write(&storage, "a", b"1");

        storage.delete_file("a").unwrap();
        assert!(!storage.file_exists("a"));
        storage.delete_file("a").unwrap();
    }

    #[test]
    fn test_missing_file() {
        let (_dir, storage) = storage();

        let err = storage.open_input("nonexistent").unwrap_err();
        assert!(matches!(err, WordForestError::Storage(_)));
        assert!(storage.rename_file("nonexistent", "other").is_err());
    }

    #[test]
    fn test_write_after_close_fails() {
        let (_dir, storage) = storage();
        let mut output = storage.create_output("a").unwrap();
        output.close().unwrap();
        assert!(output.write_all(b"late").is_err());
    }
}
