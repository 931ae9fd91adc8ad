//! Lister - drives collection, layout and output per operand
//!
//! Each directory is handled by one call to [`Lister::list_directory`]: it
//! collects and sorts the entries, prints them as a grid or as attribute
//! lines, then, in recursive mode, lists every queued subdirectory in
//! listing order. A subdirectory is listed, with everything below it, before
//! the next queued sibling.

use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::path::Path;

use termcolor::WriteColor;
use tracing::{debug, debug_span};

use crate::collector::collect_directory;
use crate::config::ListingConfig;
use crate::entry::{Entry, file_name_bytes, is_hidden_name};
use crate::error::LsError;
use crate::layout::layout_entries;
use crate::output::{IdentityCache, render_grid, write_attribute_line};
use crate::paths::{is_dir_operand, resolve_dir_path};

/// Listing driver writing to any color-capable sink.
pub struct Lister<W: WriteColor> {
    config: ListingConfig,
    out: W,
    identity: IdentityCache,
    warnings: usize,
}

impl<W: WriteColor> Lister<W> {
    pub fn new(config: ListingConfig, out: W) -> Self {
        Self {
            config,
            out,
            identity: IdentityCache::new(),
            warnings: 0,
        }
    }

    pub fn config(&self) -> &ListingConfig {
        &self.config
    }

    /// Failures reported as warnings instead of errors (non-strict mode).
    pub fn warnings(&self) -> usize {
        self.warnings
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// List every operand in order, or the current directory if there are
    /// none.
    pub fn run(&mut self, operands: &[OsString]) -> Result<(), LsError> {
        if operands.is_empty() {
            self.list_directory(OsStr::new("./"))?;
        }
        for operand in operands {
            if is_dir_operand(operand) {
                self.list_directory(operand)?;
            } else {
                self.list_file(Path::new(operand))?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Describe a single file operand with its attribute line.
    pub fn list_file(&mut self, path: &Path) -> Result<(), LsError> {
        writeln!(self.out, "the file {}:", path.display())?;

        if is_hidden_name(file_name_bytes(path)) && !self.config.show_hidden {
            return Ok(());
        }

        let entry = match Entry::stat(path.to_path_buf()) {
            Ok(entry) => entry,
            Err(e) => return self.fail(LsError::stat(path, e)),
        };
        write_attribute_line(
            &mut self.out,
            &entry,
            &mut self.identity,
            self.config.time_field(),
            self.config.use_color,
        )?;
        Ok(())
    }

    /// List one directory operand and, in recursive mode, everything below.
    pub fn list_directory(&mut self, operand: &OsStr) -> Result<(), LsError> {
        let dir = resolve_dir_path(operand);
        let span = debug_span!("list_directory", dir = %dir.display());
        let _enter = span.enter();

        let scan = match collect_directory(&dir, &self.config) {
            Ok(scan) => scan,
            Err(e) => return self.fail(e),
        };
        for skipped in &scan.skipped {
            self.warn(skipped);
        }

        if self.config.recursive {
            writeln!(self.out, "In the path: {}", dir.display())?;
        }

        if self.config.detailed {
            writeln!(
                self.out,
                "count {} total {}",
                scan.entries.len(),
                scan.entries.total_blocks()
            )?;
            for entry in &scan.entries {
                write_attribute_line(
                    &mut self.out,
                    entry,
                    &mut self.identity,
                    self.config.time_field(),
                    self.config.use_color,
                )?;
            }
        } else {
            let layout = layout_entries(&scan.entries, self.config.width);
            render_grid(&mut self.out, &scan.entries, &layout, self.config.use_color)?;
        }

        let mut queue = scan.subdirs;
        debug!(queued = queue.len(), "descending");
        while let Some(subdir) = queue.pop() {
            writeln!(self.out)?;
            self.list_directory(subdir.as_os_str())?;
        }
        Ok(())
    }

    /// Propagate `err` in strict mode; otherwise report it and carry on.
    fn fail(&mut self, err: LsError) -> Result<(), LsError> {
        let recoverable = matches!(err, LsError::OpenDir { .. } | LsError::Stat { .. });
        if self.config.strict || !recoverable {
            return Err(err);
        }
        self.warn(&err);
        Ok(())
    }

    fn warn(&mut self, err: &LsError) {
        self.warnings += 1;
        eprintln!("gridls: warning: {err}");
    }
}
