//! Operand path handling

use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::OsStrExt;
use std::path::PathBuf;

/// Whether an operand names a directory to list: it ends with `/`.
///
/// Anything else is listed as a single file, directories included.
pub fn is_dir_operand(operand: &OsStr) -> bool {
    operand.as_bytes().last() == Some(&b'/')
}

/// Turn a directory operand into the prefix used for its entries.
///
/// Operands starting with `./`, `/`, `~` or `-` are used verbatim. Anything
/// else, including `.`, `..` and dotfile names, gets `./` in front.
pub fn resolve_dir_path(operand: &OsStr) -> PathBuf {
    let bytes = operand.as_bytes();
    let explicit = bytes.starts_with(b"./") || matches!(bytes.first(), Some(b'/' | b'~' | b'-'));
    if explicit {
        PathBuf::from(operand)
    } else {
        let mut path = OsString::from("./");
        path.push(operand);
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(s: &str) -> String {
        resolve_dir_path(OsStr::new(s)).to_string_lossy().into_owned()
    }

    #[test]
    fn test_dir_operand_needs_trailing_slash() {
        assert!(is_dir_operand(OsStr::new("src/")));
        assert!(is_dir_operand(OsStr::new("/")));
        assert!(!is_dir_operand(OsStr::new("src")));
        assert!(!is_dir_operand(OsStr::new("")));
    }

    #[test]
    fn test_explicit_references_kept() {
        assert_eq!(resolve("./src/"), "./src/");
        assert_eq!(resolve("/usr/bin/"), "/usr/bin/");
        assert_eq!(resolve("~/notes/"), "~/notes/");
    }

    #[test]
    fn test_bare_names_get_current_dir_prefix() {
        assert_eq!(resolve("src/"), "./src/");
        assert_eq!(resolve("../"), "./../");
        assert_eq!(resolve(".config/"), "./.config/");
        assert_eq!(resolve("..data/"), "./..data/");
    }
}
