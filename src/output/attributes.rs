//! Detailed attribute lines
//!
//! One line per entry:
//!
//! ```text
//! drwxr-xr-x 2root root   4096 Jun  1 09:13 src
//! ```
//!
//! Permission string, link count (width 2), owner and group (width 4 each),
//! size in bytes (width 6), `Mmm dd hh:mm` timestamp, then the name.

use std::fmt::Display;
use std::io::{self, Write};

use chrono::{DateTime, Local, TimeZone};
use termcolor::WriteColor;

use crate::config::TimeField;
use crate::entry::{Entry, EntryMeta};

use super::identity::IdentityCache;
use super::utils::write_name;

/// Render the 10-character type and permission string.
pub fn mode_string(meta: &EntryMeta) -> String {
    let mode = meta.mode;
    let mut s = String::with_capacity(10);
    s.push(meta.kind().type_char());

    s.push(bit_char(mode, 0o400, 'r'));
    s.push(bit_char(mode, 0o200, 'w'));
    s.push(exec_char(mode & 0o100 != 0, mode & libc::S_ISUID as u32 != 0, 's'));

    s.push(bit_char(mode, 0o040, 'r'));
    s.push(bit_char(mode, 0o020, 'w'));
    s.push(exec_char(mode & 0o010 != 0, mode & libc::S_ISGID as u32 != 0, 's'));

    s.push(bit_char(mode, 0o004, 'r'));
    s.push(bit_char(mode, 0o002, 'w'));
    s.push(sticky_char(mode & 0o001 != 0, mode & libc::S_ISVTX as u32 != 0));

    s
}

fn bit_char(mode: u32, bit: u32, set: char) -> char {
    if mode & bit != 0 { set } else { '-' }
}

/// Execute slot: the special bit shows lowercase over an execute bit and
/// uppercase without one.
fn exec_char(exec: bool, special: bool, marker: char) -> char {
    match (special, exec) {
        (true, true) => marker,
        (true, false) => marker.to_ascii_uppercase(),
        (false, true) => 'x',
        (false, false) => '-',
    }
}

/// Other-execute slot: a sticky entry always shows `T`.
fn sticky_char(exec: bool, sticky: bool) -> char {
    match (sticky, exec) {
        (true, _) => 'T',
        (false, true) => 'x',
        (false, false) => '-',
    }
}

/// Format a timestamp as the 12-character `Mmm dd hh:mm` field.
pub fn format_timestamp<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.format("%b %e %H:%M").to_string()
}

/// Format seconds since the epoch in local time.
pub fn local_timestamp(secs: i64) -> String {
    match Local.timestamp_opt(secs, 0).single() {
        Some(time) => format_timestamp(&time),
        None => format!("{:>12}", "?"),
    }
}

/// Everything on a detailed line up to, not including, the name.
pub fn attribute_prefix(meta: &EntryMeta, owner: &str, group: &str, time: &str) -> String {
    format!(
        "{}{:>2}{:>4}{:>4} {:>6} {} ",
        mode_string(meta),
        meta.nlink,
        owner,
        group,
        meta.size,
        time
    )
}

/// Write the detailed line for one entry.
pub fn write_attribute_line<W: WriteColor>(
    out: &mut W,
    entry: &Entry,
    identity: &mut IdentityCache,
    field: TimeField,
    use_color: bool,
) -> io::Result<()> {
    let meta = entry.meta();
    let secs = match field {
        TimeField::Modified => meta.modified,
        TimeField::Accessed => meta.accessed,
    };
    let owner = identity.user_name(meta.uid).to_string();
    let group = identity.group_name(meta.gid).to_string();

    let prefix = attribute_prefix(meta, &owner, &group, &local_timestamp(secs));
    write!(out, "{prefix}")?;
    write_name(out, entry, use_color)?;
    writeln!(out)
}
