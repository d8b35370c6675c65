//! Append-only file store
//!
//! Schools are appended to `<data_dir>/data/schools.dat`, one checksummed
//! record per school, and fsynced before the insert is acknowledged. The
//! whole file is scanned and verified on open; any bad record aborts the
//! open instead of being skipped.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::errors::{StoreError, StoreResult};
use super::record;
use super::SchoolStore;
use crate::observability::{log_event, Event};
use crate::school::{NewSchool, School, SchoolId};

/// File name of the school log inside `<data_dir>/data`
pub const STORE_FILE_NAME: &str = "schools.dat";

struct Inner {
    file: File,
    schools: Vec<School>,
    next_id: SchoolId,
}

/// Durable store backed by a single append-only file.
pub struct FileStore {
    path: PathBuf,
    inner: Mutex<Inner>,
}

impl FileStore {
    /// Opens or creates the store under `data_dir`.
    pub fn open(data_dir: &Path) -> StoreResult<Self> {
        let data_subdir = data_dir.join("data");
        let path = data_subdir.join(STORE_FILE_NAME);

        fs::create_dir_all(&data_subdir).map_err(|e| {
            StoreError::io_error(
                format!("Failed to create data directory: {}", data_subdir.display()),
                e,
            )
        })?;

        let schools = read_all(&path)?;
        let next_id = schools.iter().map(|s| s.id).max().unwrap_or(0) + 1;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                StoreError::write_failed(format!("Failed to open store file: {}", path.display()), e)
            })?;

        let path_str = path.display().to_string();
        let count = schools.len().to_string();
        log_event(
            Event::StoreOpened,
            &[("path", path_str.as_str()), ("schools", count.as_str())],
        );

        Ok(Self {
            path,
            inner: Mutex::new(Inner {
                file,
                schools,
                next_id,
            }),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SchoolStore for FileStore {
    fn insert(&self, school: NewSchool) -> StoreResult<SchoolId> {
        let mut inner = self.inner.lock().map_err(|_| StoreError::poisoned())?;
        let school = school.with_id(inner.next_id);
        let bytes = record::encode(&school);

        if let Err(failure) = append_record(&mut inner.file, &bytes) {
            // The record may be partly on disk; never hand its id out again
            if !failure.rolled_back {
                inner.next_id += 1;
            }
            return Err(StoreError::write_failed(
                format!("Failed to append school {}", school.id),
                failure.error,
            ));
        }

        let id = school.id;
        inner.next_id += 1;
        inner.schools.push(school);
        Ok(id)
    }

    fn all(&self) -> StoreResult<Vec<School>> {
        let inner = self.inner.lock().map_err(|_| StoreError::poisoned())?;
        Ok(inner.schools.clone())
    }
}

/// File operations an append needs, split out so failures can be injected.
trait AppendTarget: Write {
    fn len(&self) -> io::Result<u64>;
    fn truncate(&mut self, len: u64) -> io::Result<()>;
    fn sync(&mut self) -> io::Result<()>;
}

impl AppendTarget for File {
    fn len(&self) -> io::Result<u64> {
        Ok(self.metadata()?.len())
    }

    fn truncate(&mut self, len: u64) -> io::Result<()> {
        self.set_len(len)
    }

    fn sync(&mut self) -> io::Result<()> {
        self.sync_all()
    }
}

struct AppendFailure {
    error: io::Error,
    /// File is back at its pre-append length
    rolled_back: bool,
}

/// Appends and fsyncs one record. On failure the file is cut back to its
/// previous length so later records stay decodable.
fn append_record<T: AppendTarget>(target: &mut T, bytes: &[u8]) -> Result<(), AppendFailure> {
    let prev_len = target.len().map_err(|error| AppendFailure {
        error,
        rolled_back: true,
    })?;

    let error = match target.write_all(bytes).and_then(|()| target.sync()) {
        Ok(()) => return Ok(()),
        Err(error) => error,
    };

    let rolled_back = target.truncate(prev_len).and_then(|()| target.sync()).is_ok();
    Err(AppendFailure { error, rolled_back })
}

/// Reads and verifies every record in `path`. A missing file is empty.
pub fn read_all(path: &Path) -> StoreResult<Vec<School>> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(StoreError::read_failed(
                format!("Failed to read store file: {}", path.display()),
                e,
            ))
        }
    };

    let mut schools = Vec::new();
    let mut offset = 0usize;
    while offset < data.len() {
        let (school, consumed) = record::decode(&data[offset..])
            .map_err(|e| StoreError::corruption_at_offset(offset as u64, e.to_string()))?;
        schools.push(school);
        offset += consumed;
    }

    Ok(schools)
}
