//! Storage held in memory, for tests and throwaway graphs.

use std::collections::HashMap;
use std::io::{Cursor, Read, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Result;
use crate::storage::traits::{Storage, StorageError, StorageInput, StorageOutput};

type FileMap = Arc<Mutex<HashMap<String, Arc<[u8]>>>>;

/// Named byte buffers behind a shared lock.
///
/// A file only becomes visible once its output is closed or dropped, like a
/// file whose buffered writer has been flushed.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    files: FileMap,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }

    #[cfg(test)]
    pub(crate) fn file_count(&self) -> usize {
        self.files.lock().len()
    }

    /// Total bytes across all files.
    #[cfg(test)]
    pub(crate) fn total_size(&self) -> u64 {
        self.files
            .lock()
            .values()
            .map(|data| data.len() as u64)
            .sum()
    }

    /// Store `data` under `name` in one step.
    #[cfg(test)]
    pub(crate) fn put_file(&self, name: &str, data: &[u8]) {
        self.files.lock().insert(name.to_string(), Arc::from(data));
    }
}

impl Storage for MemoryStorage {
    fn open_input(&self, name: &str) -> Result<Box<dyn StorageInput>> {
        let data = self
            .files
            .lock()
            .get(name)
            .cloned()
            .ok_or_else(|| StorageError::FileNotFound(name.to_string()))?;

        Ok(Box::new(MemoryInput {
            cursor: Cursor::new(data),
        }))
    }

    fn create_output(&self, name: &str) -> Result<Box<dyn StorageOutput>> {
        Ok(Box::new(MemoryOutput {
            name: name.to_string(),
            buffer: Vec::new(),
            files: Some(Arc::clone(&self.files)),
        }))
    }

    fn file_exists(&self, name: &str) -> bool {
        self.files.lock().contains_key(name)
    }

    fn delete_file(&self, name: &str) -> Result<()> {
        self.files.lock().remove(name);
        Ok(())
    }

    fn rename_file(&self, from: &str, to: &str) -> Result<()> {
        let mut files = self.files.lock();
        let data = files
            .remove(from)
            .ok_or_else(|| StorageError::FileNotFound(from.to_string()))?;
        files.insert(to.to_string(), data);
        Ok(())
    }

    fn sync(&self) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug)]
struct MemoryInput {
    cursor: Cursor<Arc<[u8]>>,
}

impl Read for MemoryInput {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.cursor.read(buf)
    }
}

impl StorageInput for MemoryInput {
    fn size(&self) -> u64 {
        self.cursor.get_ref().len() as u64
    }
}

/// Buffers writes until close. `files` is taken on close.
#[derive(Debug)]
struct MemoryOutput {
    name: String,
    buffer: Vec<u8>,
    files: Option<FileMap>,
}

impl Write for MemoryOutput {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if self.files.is_none() {
            return Err(std::io::Error::other(StorageError::Closed(self.name.clone())));
        }
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl StorageOutput for MemoryOutput {
    fn position(&self) -> u64 {
        self.buffer.len() as u64
    }

    fn close(&mut self) -> Result<()> {
        if let Some(files) = self.files.take() {
            let data: Arc<[u8]> = std::mem::take(&mut self.buffer).into();
            files.lock().insert(self.name.clone(), data);
        }
        Ok(())
    }
}

impl Drop for MemoryOutput {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_storage() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.file_count(), 0);
        assert_eq!(storage.total_size(), 0);
        assert!(!storage.file_exists("wordForest.json"));
    }

    #[test]
    fn test_file_is_visible_after_close() {
        let storage = MemoryStorage::new();

        let mut output = storage.create_output("wordForest.json").unwrap();
        output.write_all(b"Hello, World!").unwrap();
        assert_eq!(output.position(), 13);
        assert!(!storage.file_exists("wordForest.json"));
        output.close().unwrap();
        assert!(output.write_all(b"late").is_err());

        let mut input = storage.open_input("wordForest.json").unwrap();
        let mut buffer = Vec::new();
        input.read_to_end(&mut buffer).unwrap();

        assert_eq!(buffer, b"Hello, World!");
        assert_eq!(input.size(), 13);
        assert_eq!(storage.total_size(), 13);
    }

    #[test]
    fn test_drop_publishes_file() {
        let storage = MemoryStorage::new();
        {
            let mut output = storage.create_output("dropped").unwrap();
            output.write_all(b"data").unwrap();
        }
        assert_eq!(storage.total_size(), 4);
    }

    #[test]
    fn test_clones_share_files() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.put_file("a", b"1");
        assert!(other.file_exists("a"));
    }

    #[test]
    fn test_rename_and_delete() {
        let storage = MemoryStorage::new();
        storage.put_file("b", b"12");
        storage.put_file("a", b"1");
        assert_eq!(storage.file_count(), 2);

        storage.rename_file("a", "b").unwrap();
        assert!(!storage.file_exists("a"));
        assert_eq!(storage.file_count(), 1);
        assert_eq!(storage.total_size(), 1);

        storage.delete_file("b").unwrap();
        storage.delete_file("b").unwrap();
        assert_eq!(storage.file_count(), 0);
        assert!(storage.rename_file("a", "c").is_err());
    }

    #[test]
    fn test_temp_names_skip_taken_ones() {
        let storage = MemoryStorage::new();
        storage.put_file("snap_0.tmp", b"taken");

        let (temp_name, mut output) = storage.create_temp_output("snap").unwrap();
        assert_eq!(temp_name, "snap_1.tmp");
        output.close().unwrap();
        assert!(storage.file_exists("snap_1.tmp"));
    }

    #[test]
    fn test_missing_file() {
        let storage = MemoryStorage::new();
        assert!(storage.open_input("nonexistent").is_err());
    }
}
