//! Shared helpers for writing entry names

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

use crate::entry::Entry;

/// Write an entry's name, bold blue for directories when color is on.
pub fn write_name<W: WriteColor>(out: &mut W, entry: &Entry, use_color: bool) -> io::Result<()> {
    if use_color && entry.is_dir() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(out, "{}", entry.name())?;
        out.reset()?;
    } else {
        write!(out, "{}", entry.name())?;
    }
    Ok(())
}

/// Write `count` spaces.
pub fn write_padding<W: Write>(out: &mut W, count: usize) -> io::Result<()> {
    if count > 0 {
        write!(out, "{:count$}", "")?;
    }
    Ok(())
}
