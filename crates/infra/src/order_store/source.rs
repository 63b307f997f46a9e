use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};

/// Where order records come from.
///
/// The repository never hard-codes a location; anything that can hand out a
/// buffered reader over `id,name,price,...` lines qualifies. Each call to
/// `open` yields a fresh reader positioned at the first record.
pub trait RecordSource {
    /// Open a fresh reader over the full dataset.
    fn open(&self) -> io::Result<Box<dyn BufRead + '_>>;
}

/// Dataset stored as a plain CSV file on disk.
///
/// The file handle lives only as long as one repository call; dropping the
/// reader releases it on every exit path, parse failures included.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for CsvFileSource {
    fn open(&self) -> io::Result<Box<dyn BufRead + '_>> {
        let file = File::open(&self.path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Dataset held in memory (tests, embedded fixtures).
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    data: String,
}

impl InMemorySource {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

impl RecordSource for InMemorySource {
    fn open(&self) -> io::Result<Box<dyn BufRead + '_>> {
        Ok(Box::new(Cursor::new(self.data.as_bytes())))
    }
}
