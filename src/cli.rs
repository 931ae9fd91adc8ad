//! Command-line parsing

use std::ffi::OsString;
use std::io::IsTerminal;

use clap::{Parser, ValueEnum};

use crate::config::ListingConfig;
use crate::error::LsError;
use crate::terminal::resolve_width;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
pub fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "gridls")]
#[command(about = "List directory contents in terminal-width columns")]
#[command(version)]
pub struct Args {
    /// Show entries whose names start with '.', including . and ..
    #[arg(short = 'a')]
    pub all: bool,

    /// Show one line of attributes per entry
    #[arg(short = 'l')]
    pub long: bool,

    /// Sort by access time; with -l, show access time instead of modification time
    #[arg(short = 'u')]
    pub access_time: bool,

    /// List subdirectories recursively
    #[arg(short = 'R')]
    pub recursive: bool,

    /// Line width in columns (default: terminal width, or 80)
    #[arg(short = 'w', long = "width", value_name = "COLS",
          value_parser = clap::value_parser!(u16).range(1..))]
    pub width: Option<u16>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Warn about unreadable entries and directories instead of stopping
    #[arg(long = "keep-going")]
    pub keep_going: bool,

    /// Files to describe, or directories (ending in '/') to list
    #[arg(value_name = "PATH")]
    pub paths: Vec<OsString>,
}

impl Args {
    pub fn config(&self) -> ListingConfig {
        ListingConfig {
            show_hidden: self.all,
            detailed: self.long,
            access_time: self.access_time,
            recursive: self.recursive,
            width: resolve_width(self.width.map(usize::from)),
            strict: !self.keep_going,
            use_color: should_use_color(self.color),
        }
    }
}

/// A parsed command line: what to list and how.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub config: ListingConfig,
    /// Operands in command-line order; empty means the current directory.
    pub operands: Vec<OsString>,
}

/// Parse a full argument vector, program name first.
pub fn parse_args<I, T>(args: I) -> Result<Invocation, LsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::try_parse_from(args)?;
    Ok(Invocation {
        config: args.config(),
        operands: args.paths,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_combined_flags() {
        let inv = parse_args(["gridls", "-laR", "-w", "40"]).unwrap();
        assert!(inv.config.show_hidden);
        assert!(inv.config.detailed);
        assert!(inv.config.recursive);
        assert!(!inv.config.access_time);
        assert_eq!(inv.config.width, 40);
        assert!(inv.operands.is_empty());
    }

    #[test]
    fn test_operands_keep_order() {
        let inv = parse_args(["gridls", "b/", "-u", "a", "c/"]).unwrap();
        assert!(inv.config.access_time);
        assert_eq!(inv.operands, vec!["b/", "a", "c/"]);
    }

    #[test]
    fn test_unknown_flag_is_usage_error() {
        let err = parse_args(["gridls", "-lx"]).unwrap_err();
        assert!(err.is_usage());
        assert_ne!(err.exit_code(), 0);
        assert!(err.to_string().contains("-x"));
        match err {
            LsError::Usage(e) => assert_eq!(e.kind(), ErrorKind::UnknownArgument),
            other => panic!("expected usage error, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_width_rejected() {
        let err = parse_args(["gridls", "--width", "0"]).unwrap_err();
        assert!(err.is_usage());
    }

    #[test]
    fn test_keep_going_disables_strict() {
        let inv = parse_args(["gridls", "--keep-going"]).unwrap();
        assert!(!inv.config.strict);
        let inv = parse_args(["gridls"]).unwrap();
        assert!(inv.config.strict);
    }

    #[test]
    fn test_color_modes() {
        assert!(should_use_color(ColorMode::Always));
        assert!(!should_use_color(ColorMode::Never));
        let inv = parse_args(["gridls", "--color", "never"]).unwrap();
        assert!(!inv.config.use_color);
    }
}
