//! Listing output
//!
//! # Module Structure
//!
//! - `grid` - column grid for plain listings
//! - `attributes` - detailed per-entry attribute lines
//! - `identity` - uid/gid to name lookup
//! - `utils` - name and padding helpers

mod attributes;
mod grid;
mod identity;
mod utils;

pub use attributes::{
    attribute_prefix, format_timestamp, local_timestamp, mode_string, write_attribute_line,
};
pub use grid::render_grid;
pub use identity::IdentityCache;
pub use utils::{write_name, write_padding};
