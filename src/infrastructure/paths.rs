//! Filesystem location utilities.
//!
//! This module resolves the per-user locations the widget reads and writes,
//! and handles tilde expansion for user-supplied paths like `--catalog` and
//! `--theme-file`.

use directories::{BaseDirs, ProjectDirs};
use std::path::{Path, PathBuf};

/// Returns the per-user data directory for bookstall files.
///
/// Resolves through the platform conventions (`~/.local/share/bookstall` on
/// Linux, `~/Library/Application Support/bookstall` on macOS). Trace output
/// lands here.
///
/// # Returns
///
/// `None` when no home directory can be determined for the current user.
#[must_use]
pub fn data_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bookstall").map(|dirs| dirs.data_dir().to_path_buf())
}

/// Expands a leading tilde in a user-supplied path to the home directory.
///
/// Paths without a tilde prefix pass through unchanged, as do tilde paths
/// when no home directory can be determined.
///
/// # Examples
///
/// ```rust
/// use bookstall::infrastructure::expand_tilde;
///
/// let expanded = expand_tilde("/var/lib/books.json");
/// assert_eq!(expanded.to_str().unwrap(), "/var/lib/books.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
    expand_tilde_with(path, home.as_deref())
}

fn expand_tilde_with(path: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(path);
    };

    if path == "~" {
        return home.to_path_buf();
    }

    path.strip_prefix("~/")
        .map_or_else(|| PathBuf::from(path), |rest| home.join(rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_tilde_expands_to_home() {
        let home = Path::new("/home/reader");
        assert_eq!(expand_tilde_with("~", Some(home)), PathBuf::from("/home/reader"));
    }

    #[test]
    fn tilde_prefix_joins_onto_home() {
        let home = Path::new("/home/reader");
        assert_eq!(
            expand_tilde_with("~/books/catalog.json", Some(home)),
            PathBuf::from("/home/reader/books/catalog.json")
        );
    }

    #[test]
    fn absolute_and_relative_paths_pass_through() {
        let home = Path::new("/home/reader");
        assert_eq!(
            expand_tilde_with("/etc/bookstall.json", Some(home)),
            PathBuf::from("/etc/bookstall.json")
        );
        assert_eq!(
            expand_tilde_with("catalog.json", Some(home)),
            PathBuf::from("catalog.json")
        );
        // A tilde mid-path is not an expansion point.
        assert_eq!(
            expand_tilde_with("/data/~backup", Some(home)),
            PathBuf::from("/data/~backup")
        );
    }

    #[test]
    fn missing_home_leaves_the_path_alone() {
        assert_eq!(expand_tilde_with("~/books.json", None), PathBuf::from("~/books.json"));
    }
}
