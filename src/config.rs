//! Listing configuration

/// Terminal width used when the real width cannot be determined.
pub const DEFAULT_WIDTH: usize = 80;

/// Comparison key for the entry sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderMode {
    /// Byte-wise comparison of full paths.
    #[default]
    Name,
    /// Most recently accessed first; ties keep scan order.
    AccessTime,
}

/// Which timestamp a detailed line shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Modified,
    Accessed,
}

/// Configuration for a listing run.
#[derive(Debug, Clone)]
pub struct ListingConfig {
    /// Include entries whose name starts with `.` (`-a`)
    pub show_hidden: bool,
    /// One attribute line per entry instead of the grid (`-l`)
    pub detailed: bool,
    /// Use access time instead of modification time (`-u`)
    pub access_time: bool,
    /// Descend into subdirectories (`-R`)
    pub recursive: bool,
    /// Target line width in character columns
    pub width: usize,
    /// Abort on the first filesystem error instead of warning and skipping
    pub strict: bool,
    pub use_color: bool,
}

impl ListingConfig {
    /// `-u` reorders the grid only; in detailed mode it switches the
    /// displayed timestamp and the order stays by name.
    pub fn order_mode(&self) -> OrderMode {
        if self.access_time && !self.detailed {
            OrderMode::AccessTime
        } else {
            OrderMode::Name
        }
    }

    pub fn time_field(&self) -> TimeField {
        if self.access_time && self.detailed {
            TimeField::Accessed
        } else {
            TimeField::Modified
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            show_hidden: false,
            detailed: false,
            access_time: false,
            recursive: false,
            width: DEFAULT_WIDTH,
            strict: true,
            use_color: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_time_orders_grid_only() {
        let grid = ListingConfig {
            access_time: true,
            ..Default::default()
        };
        assert_eq!(grid.order_mode(), OrderMode::AccessTime);
        assert_eq!(grid.time_field(), TimeField::Modified);

        let detailed = ListingConfig {
            access_time: true,
            detailed: true,
            ..Default::default()
        };
        assert_eq!(detailed.order_mode(), OrderMode::Name);
        assert_eq!(detailed.time_field(), TimeField::Accessed);
    }

    #[test]
    fn test_default_is_strict_name_order() {
        let config = ListingConfig::default();
        assert!(config.strict);
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.order_mode(), OrderMode::Name);
    }
}
