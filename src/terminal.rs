//! Terminal width detection

use std::os::raw::c_int;

use crate::config::DEFAULT_WIDTH;

/// Column count of the controlling terminal, checking stdout then stdin.
pub fn terminal_width() -> Option<usize> {
    [libc::STDOUT_FILENO, libc::STDIN_FILENO]
        .into_iter()
        .find_map(query_width)
}

/// Explicit width if given, else the terminal's, else [`DEFAULT_WIDTH`].
pub fn resolve_width(explicit: Option<usize>) -> usize {
    explicit
        .or_else(terminal_width)
        .unwrap_or(DEFAULT_WIDTH)
}

fn query_width(fd: c_int) -> Option<usize> {
    let mut size: libc::winsize = unsafe { std::mem::zeroed() };
    let result = unsafe { libc::ioctl(fd, libc::TIOCGWINSZ as _, &mut size) };

    if result == -1 || size.ws_col == 0 {
        None
    } else {
        Some(usize::from(size.ws_col))
    }
}
