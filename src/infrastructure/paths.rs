//! Path and URI helpers for command-line arguments.
//!
//! Command-line inputs may be plain paths (relative or absolute) or URIs. This
//! module decides which is which, turns paths into absolute, lexically normalized
//! paths, and computes the display label shown next to a file.

use std::path::{Component, Path, PathBuf};

/// Location of the config file relative to the home directory.
const CONFIG_FILE: &str = ".config/phoenix/phoenix.toml";

/// Returns the default config file path, `~/.config/phoenix/phoenix.toml`.
///
/// Returns `None` when the home directory cannot be determined.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE))
}

/// Returns the URI scheme of `arg` if it looks like a URI.
///
/// A scheme is an ASCII letter followed by letters, digits, `+`, `-` or `.`,
/// terminated by `:`. Single-letter schemes are rejected so that Windows drive
/// letters (`C:\...`) stay paths.
///
/// # Examples
///
/// ```
/// use phoenix::infrastructure::uri_scheme;
///
/// assert_eq!(uri_scheme("http://x/y"), Some("http"));
/// assert_eq!(uri_scheme("file:///tmp/a"), Some("file"));
/// assert_eq!(uri_scheme("a.txt"), None);
/// assert_eq!(uri_scheme("C:\\a.txt"), None);
/// ```
#[must_use]
pub fn uri_scheme(arg: &str) -> Option<&str> {
    let (scheme, _) = arg.split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() || scheme.len() < 2 {
        return None;
    }
    chars
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        .then_some(scheme)
}

/// Collapses `.` and `..` components without touching the filesystem.
///
/// Symlinks are not resolved, so `a/link/../b` becomes `a/b` even if `link`
/// points elsewhere. `..` at the root stays at the root.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Makes `arg` absolute against `cwd` and normalizes it.
#[must_use]
pub fn absolutize(arg: &str, cwd: &Path) -> PathBuf {
    let path = Path::new(arg);
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&cwd.join(path))
    }
}

/// Returns the label shown for `path`: its path relative to `cwd`, or the
/// absolute path when it is not strictly below `cwd`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use phoenix::infrastructure::display_label;
///
/// let cwd = Path::new("/home/user");
/// assert_eq!(display_label(Path::new("/home/user/a.txt"), cwd), "a.txt");
/// assert_eq!(display_label(Path::new("/etc/hosts"), cwd), "/etc/hosts");
/// assert_eq!(display_label(Path::new("/home/user"), cwd), "/home/user");
/// ```
#[must_use]
pub fn display_label(path: &Path, cwd: &Path) -> String {
    match path.strip_prefix(cwd) {
        Ok(relative) if !relative.as_os_str().is_empty() => relative.display().to_string(),
        _ => path.display().to_string(),
    }
}
