//! Manifest reader and writer.
//!
//! [`Manifest`] wraps a source path rather than an open file handle: each
//! call to [`Manifest::read`] re-opens the source and returns a fresh lazy
//! [`Entries`] iterator. The sync algorithm depends on this restartability:
//! it scans the manifest once for natural keys and a second time for the
//! full entries it decided to add.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Lines, Write};
use std::path::{Path, PathBuf};

use crate::entry::Entry;
use crate::error::{ManifestError, ManifestResult};

/// Format marker written as the first line of every manifest.
///
/// Readers consume the first line without interpreting it, so older and
/// newer markers parse the same way.
pub const FORMAT_MARKER: &str = "depot-manifest-v1";

/// A manifest file on disk.
#[derive(Clone, Debug)]
pub struct Manifest {
    path: PathBuf,
}

impl Manifest {
    /// Wrap an existing manifest file. No I/O happens until [`read`](Self::read).
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the manifest file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Start a fresh lazy pass over the entries.
    ///
    /// Each call re-opens the source from the start, so the manifest can be
    /// scanned any number of times.
    pub fn read(&self) -> ManifestResult<Entries<BufReader<File>>> {
        let file = File::open(&self.path)?;
        Ok(Entries::new(BufReader::new(file)))
    }

    /// Serialize `entries` to a new manifest file at `path`, preserving order.
    ///
    /// Writes the format marker first, then one line per entry. Fails if the
    /// destination cannot be created.
    pub fn write<I>(path: impl Into<PathBuf>, entries: I) -> ManifestResult<Manifest>
    where
        I: IntoIterator<Item = Entry>,
    {
        let path = path.into();
        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{FORMAT_MARKER}")?;
        for entry in entries {
            writeln!(writer, "{},{},{}", entry.path, entry.digest, entry.size)?;
        }
        writer.flush()?;
        Ok(Manifest::open(path))
    }
}

/// Lazy iterator over manifest entries.
///
/// Yields `Err` for the first malformed line and is exhausted afterward from
/// the caller's point of view; malformed manifests are fatal to a sync.
pub struct Entries<R> {
    lines: Lines<R>,
    line_no: usize,
}

impl<R: BufRead> Entries<R> {
    /// Parse entries from any buffered reader. The first line is treated as
    /// the format marker and skipped.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }
}

impl<R: BufRead> Iterator for Entries<R> {
    type Item = ManifestResult<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_no += 1;
            if self.line_no == 1 {
                // Format marker: consumed, not interpreted.
                continue;
            }
            if line.trim().is_empty() {
                continue;
            }
            return Some(parse_line(&line, self.line_no));
        }
    }
}

fn parse_line(line: &str, line_no: usize) -> ManifestResult<Entry> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 3 {
        return Err(ManifestError::Malformed {
            line: line_no,
            reason: format!("expected 3 fields, found {}", fields.len()),
        });
    }
    let size: u64 = fields[2].trim().parse().map_err(|_| ManifestError::Malformed {
        line: line_no,
        reason: format!("size is not a decimal integer: {:?}", fields[2]),
    })?;
    Ok(Entry::new(fields[0], fields[1], size))
}
