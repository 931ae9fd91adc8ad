//! Entry collection and the traversal queue
//!
//! [`collect_directory`] reads one directory, drops hidden entries unless
//! asked not to, stats every candidate and inserts it into an
//! [`EntrySequence`] that is kept sorted at every step. In recursive mode the
//! subdirectories are then recorded on a [`TraversalQueue`] in the order they
//! are listed.

use std::collections::VecDeque;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{ListingConfig, OrderMode};
use crate::entry::{Entry, is_hidden_name};
use crate::error::LsError;

/// Entries of one directory, sorted as they are inserted.
#[derive(Debug, Clone)]
pub struct EntrySequence {
    entries: Vec<Entry>,
    order: OrderMode,
    max_name_len: usize,
    total_blocks: u64,
}

impl EntrySequence {
    pub fn new(order: OrderMode) -> Self {
        Self {
            entries: Vec::new(),
            order,
            max_name_len: 0,
            total_blocks: 0,
        }
    }

    /// Insert `entry` before the first occupant that sorts after it and
    /// return the position it landed at. Equal keys keep insertion order.
    pub fn insert(&mut self, entry: Entry) -> usize {
        let order = self.order;
        let pos = self
            .entries
            .iter()
            .position(|existing| sorts_before(order, &entry, existing))
            .unwrap_or(self.entries.len());

        self.max_name_len = self.max_name_len.max(entry.name_len());
        self.total_blocks += entry.meta().kilo_blocks();
        self.entries.insert(pos, entry);
        pos
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Entry] {
        &self.entries
    }

    pub fn order(&self) -> OrderMode {
        self.order
    }

    /// Longest name seen so far, in characters.
    pub fn max_name_len(&self) -> usize {
        self.max_name_len
    }

    /// Sum of the entries' sizes in 1K blocks.
    pub fn total_blocks(&self) -> u64 {
        self.total_blocks
    }
}

impl<'a> IntoIterator for &'a EntrySequence {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Whether `new` belongs strictly in front of `existing`.
fn sorts_before(order: OrderMode, new: &Entry, existing: &Entry) -> bool {
    match order {
        OrderMode::Name => {
            new.path().as_os_str().as_bytes() < existing.path().as_os_str().as_bytes()
        }
        OrderMode::AccessTime => existing.meta().accessed < new.meta().accessed,
    }
}

/// Subdirectories waiting to be listed, first queued first out.
///
/// [`collect_directory`] fills it after sorting, so the queue follows the
/// listing order of the directory rather than the raw readdir order.
#[derive(Debug, Clone, Default)]
pub struct TraversalQueue {
    dirs: VecDeque<PathBuf>,
}

impl TraversalQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a directory path, adding the trailing separator that marks it
    /// as a directory operand.
    pub fn push(&mut self, path: &Path) {
        let mut dir = path.as_os_str().to_os_string();
        if !dir.as_bytes().ends_with(b"/") {
            dir.push("/");
        }
        self.dirs.push_back(PathBuf::from(dir));
    }

    pub fn pop(&mut self) -> Option<PathBuf> {
        self.dirs.pop_front()
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.dirs.iter().map(PathBuf::as_path)
    }
}

/// Result of scanning one directory.
#[derive(Debug)]
pub struct DirectoryScan {
    pub entries: EntrySequence,
    pub subdirs: TraversalQueue,
    /// Entries that could not be stat'ed; only filled in non-strict mode.
    pub skipped: Vec<LsError>,
}

/// Read, filter, stat and sort the entries of `dir`.
///
/// `dir` is used verbatim as the prefix of every entry path, so it should
/// end with `/`. Fails with [`LsError::OpenDir`] if the directory cannot be
/// read. A stat failure fails the scan in strict mode and is collected into
/// `skipped` otherwise.
pub fn collect_directory(dir: &Path, config: &ListingConfig) -> Result<DirectoryScan, LsError> {
    let reader = fs::read_dir(dir).map_err(|e| LsError::open_dir(dir, e))?;

    let mut names: Vec<OsString> = Vec::new();
    if config.show_hidden {
        names.push(OsString::from("."));
        names.push(OsString::from(".."));
    }
    for dirent in reader {
        let dirent = dirent.map_err(|e| LsError::open_dir(dir, e))?;
        names.push(dirent.file_name());
    }

    let mut scan = DirectoryScan {
        entries: EntrySequence::new(config.order_mode()),
        subdirs: TraversalQueue::new(),
        skipped: Vec::new(),
    };

    for name in names {
        if is_hidden_name(&name) && !config.show_hidden {
            continue;
        }

        let path = join_name(dir, &name);
        let entry = match Entry::stat(path.clone()) {
            Ok(entry) => entry,
            Err(e) if config.strict => return Err(LsError::stat(path, e)),
            Err(e) => {
                scan.skipped.push(LsError::stat(path, e));
                continue;
            }
        };

        scan.entries.insert(entry);
    }

    if config.recursive {
        for entry in &scan.entries {
            if entry.is_dir() && !entry.is_self_or_parent() {
                scan.subdirs.push(entry.path());
            }
        }
    }

    debug!(
        dir = %dir.display(),
        entries = scan.entries.len(),
        subdirs = scan.subdirs.len(),
        skipped = scan.skipped.len(),
        "collected directory"
    );

    Ok(scan)
}

/// Append a bare entry name to a directory prefix.
fn join_name(dir: &Path, name: &OsStr) -> PathBuf {
    let mut path = dir.as_os_str().to_os_string();
    path.push(name);
    PathBuf::from(path)
}
