//! Content-type guessing from file metadata and extension.
//!
//! Only metadata is consulted; file contents are never read. The result is a
//! MIME-style label used to pick an icon for the file's affordance.

use std::fs::Metadata;
use std::path::Path;

/// Fallback for regular files with an unknown extension.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Content type for directories.
pub const DIRECTORY: &str = "inode/directory";

/// Content type for empty regular files.
pub const ZERO_SIZE: &str = "application/x-zerosize";

const BY_EXTENSION: &[(&str, &str)] = &[
    ("txt", "text/plain"),
    ("md", "text/markdown"),
    ("csv", "text/csv"),
    ("html", "text/html"),
    ("htm", "text/html"),
    ("css", "text/css"),
    ("js", "application/javascript"),
    ("json", "application/json"),
    ("toml", "application/toml"),
    ("xml", "application/xml"),
    ("yaml", "application/yaml"),
    ("yml", "application/yaml"),
    ("rs", "text/rust"),
    ("c", "text/x-csrc"),
    ("h", "text/x-chdr"),
    ("cpp", "text/x-c++src"),
    ("hpp", "text/x-c++hdr"),
    ("py", "text/x-python"),
    ("sh", "application/x-shellscript"),
    ("pdf", "application/pdf"),
    ("zip", "application/zip"),
    ("gz", "application/gzip"),
    ("tar", "application/x-tar"),
    ("xz", "application/x-xz"),
    ("7z", "application/x-7z-compressed"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("svg", "image/svg+xml"),
    ("bmp", "image/bmp"),
    ("mp3", "audio/mpeg"),
    ("flac", "audio/flac"),
    ("ogg", "audio/ogg"),
    ("wav", "audio/x-wav"),
    ("mp4", "video/mp4"),
    ("mkv", "video/x-matroska"),
    ("webm", "video/webm"),
    ("avi", "video/x-msvideo"),
];

/// Guesses the content type of `path` from its metadata and extension.
///
/// # Examples
///
/// ```no_run
/// use phoenix::infrastructure::content_type;
/// use std::path::Path;
///
/// let path = Path::new("notes.txt");
/// let metadata = std::fs::metadata(path)?;
/// assert_eq!(content_type::guess(path, &metadata), "text/plain");
/// # Ok::<(), std::io::Error>(())
/// ```
#[must_use]
pub fn guess(path: &Path, metadata: &Metadata) -> &'static str {
    if metadata.is_dir() {
        return DIRECTORY;
    }
    if let Some(known) = from_extension(path) {
        return known;
    }
    if metadata.is_file() && metadata.len() == 0 {
        return ZERO_SIZE;
    }
    OCTET_STREAM
}

/// Looks up the content type registered for the extension of `path`.
#[must_use]
pub fn from_extension(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    BY_EXTENSION
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, content_type)| *content_type)
}

/// Returns the freedesktop icon name for a content type.
///
/// `text/plain` becomes `text-plain`; callers fall back to
/// [`generic_icon_name`] when the theme lacks the specific icon.
#[must_use]
pub fn icon_name(content_type: &str) -> String {
    content_type.replace('/', "-")
}

/// Returns the generic icon name for a content type's major part.
///
/// `inode/directory` maps to `folder`; everything else to `{major}-x-generic`.
#[must_use]
pub fn generic_icon_name(content_type: &str) -> String {
    if content_type == DIRECTORY {
        return "folder".to_string();
    }
    let major = content_type.split('/').next().unwrap_or("application");
    format!("{major}-x-generic")
}
