//! Directory entry records
//!
//! An [`Entry`] is the path at which a file was found plus the metadata
//! captured when it was stat'ed. Everything later in the pipeline (ordering,
//! layout, attribute lines) works from this cached copy.

use std::ffi::OsStr;
use std::fs::{self, Metadata};
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};

/// File type decoded from the `st_mode` type bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Regular,
    Directory,
    Symlink,
    CharDevice,
    BlockDevice,
    Fifo,
    Socket,
    Unknown,
}

impl FileKind {
    pub fn from_mode(mode: u32) -> Self {
        match mode as libc::mode_t & libc::S_IFMT {
            libc::S_IFREG => Self::Regular,
            libc::S_IFDIR => Self::Directory,
            libc::S_IFLNK => Self::Symlink,
            libc::S_IFCHR => Self::CharDevice,
            libc::S_IFBLK => Self::BlockDevice,
            libc::S_IFIFO => Self::Fifo,
            libc::S_IFSOCK => Self::Socket,
            _ => Self::Unknown,
        }
    }

    /// Leading character of the permission string.
    pub fn type_char(self) -> char {
        match self {
            Self::Regular => '-',
            Self::Directory => 'd',
            Self::Symlink => 'l',
            Self::CharDevice => 'c',
            Self::BlockDevice => 'b',
            Self::Fifo => 'f',
            Self::Socket => 's',
            Self::Unknown => '?',
        }
    }
}

/// Metadata captured for an entry at stat time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntryMeta {
    pub mode: u32,
    pub nlink: u64,
    pub uid: u32,
    pub gid: u32,
    /// Size in bytes
    pub size: u64,
    /// Allocated 512-byte blocks
    pub blocks: u64,
    /// Modification time, whole seconds since the epoch
    pub modified: i64,
    /// Access time, whole seconds since the epoch
    pub accessed: i64,
}

impl EntryMeta {
    pub fn from_metadata(meta: &Metadata) -> Self {
        Self {
            mode: meta.mode(),
            nlink: meta.nlink(),
            uid: meta.uid(),
            gid: meta.gid(),
            size: meta.size(),
            blocks: meta.blocks(),
            modified: meta.mtime(),
            accessed: meta.atime(),
        }
    }

    pub fn kind(&self) -> FileKind {
        FileKind::from_mode(self.mode)
    }

    pub fn is_dir(&self) -> bool {
        self.kind() == FileKind::Directory
    }

    /// Size in 1K units, as shown on the detailed summary line.
    pub fn kilo_blocks(&self) -> u64 {
        self.blocks / 2
    }
}

/// A file found during a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    path: PathBuf,
    name: String,
    name_len: usize,
    meta: EntryMeta,
}

impl Entry {
    pub fn new(path: PathBuf, meta: EntryMeta) -> Self {
        let name = file_name_bytes(&path).to_string_lossy().into_owned();
        let name_len = name.chars().count();
        Self {
            path,
            name,
            name_len,
            meta,
        }
    }

    /// Stat `path` (following symlinks) and build an entry for it.
    pub fn stat(path: PathBuf) -> io::Result<Self> {
        let meta = fs::metadata(&path)?;
        Ok(Self::new(path, EntryMeta::from_metadata(&meta)))
    }

    /// Full path, including the directory prefix it was found under.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name component only, for display.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display width of the name in characters.
    pub fn name_len(&self) -> usize {
        self.name_len
    }

    pub fn meta(&self) -> &EntryMeta {
        &self.meta
    }

    pub fn is_dir(&self) -> bool {
        self.meta.is_dir()
    }

    /// `.` or `..`
    pub fn is_self_or_parent(&self) -> bool {
        self.name == "." || self.name == ".."
    }
}

/// Everything after the last `/` of a path, taken byte-wise so that `./.`
/// and `./..` keep their final component.
pub fn file_name_bytes(path: &Path) -> &OsStr {
    let bytes = path.as_os_str().as_bytes();
    let start = bytes
        .iter()
        .rposition(|&b| b == b'/')
        .map_or(0, |pos| pos + 1);
    OsStr::from_bytes(&bytes[start..])
}

/// Whether a name is hidden by default.
pub fn is_hidden_name(name: &OsStr) -> bool {
    name.as_bytes().first() == Some(&b'.')
}
