//! gridls - ls with terminal-width-aware column layout

pub mod cli;
pub mod collector;
pub mod config;
pub mod entry;
pub mod error;
pub mod layout;
pub mod lister;
pub mod output;
pub mod paths;
pub mod terminal;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use cli::{Args, ColorMode, Invocation, parse_args};
pub use collector::{DirectoryScan, EntrySequence, TraversalQueue, collect_directory};
pub use config::{ListingConfig, OrderMode, TimeField};
pub use entry::{Entry, EntryMeta, FileKind};
pub use error::LsError;
pub use layout::{ColumnLayout, layout_entries, solve_layout};
pub use lister::Lister;
pub use output::render_grid;
