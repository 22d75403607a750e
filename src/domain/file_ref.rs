//! Validated handles to local files.
//!
//! A [`FileReference`] is created from one raw command-line input. Resolution
//! follows command-line-argument semantics: inputs carrying a URI scheme are
//! parsed as URIs, everything else is a path relative to the working directory.
//! Only `file` resources that exist at resolution time become references.

use crate::domain::error::{PhoenixError, Result};
use crate::infrastructure::{absolutize, content_type, display_label, uri_scheme};
use std::path::{Path, PathBuf};
use url::Url;

/// A validated local file offered by a drag source.
///
/// Existence is checked once, when the reference is created; it is not
/// re-checked afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReference {
    path: PathBuf,
    uri: Url,
    label: String,
    content_type: String,
    exists: bool,
}

impl FileReference {
    /// Resolves one raw input into a file reference.
    ///
    /// # Errors
    ///
    /// - [`PhoenixError::UnsupportedScheme`] if the input is a URI whose scheme
    ///   is not `file`
    /// - [`PhoenixError::InvalidUri`] if a `file:` URI cannot be parsed or has no
    ///   local path
    /// - [`PhoenixError::MissingFile`] if the resolved path does not exist
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use phoenix::FileReference;
    /// use std::path::Path;
    ///
    /// let file = FileReference::resolve("notes.txt", Path::new("/home/user"))?;
    /// assert_eq!(file.uri().as_str(), "file:///home/user/notes.txt");
    /// assert_eq!(file.label(), "notes.txt");
    /// # Ok::<(), phoenix::PhoenixError>(())
    /// ```
    pub fn resolve(raw: &str, cwd: &Path) -> Result<Self> {
        let path = resolve_local_path(raw, cwd)?;

        let metadata = std::fs::metadata(&path).map_err(|_| PhoenixError::MissingFile {
            path: path.clone(),
        })?;

        let uri = Url::from_file_path(&path).map_err(|()| PhoenixError::InvalidUri {
            uri: raw.to_string(),
            reason: "path cannot be expressed as a file uri".to_string(),
        })?;

        Ok(Self {
            label: display_label(&path, cwd),
            content_type: content_type::guess(&path, &metadata).to_string(),
            uri,
            path,
            exists: true,
        })
    }

    /// Absolute path of the file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `file://` URI of the file.
    #[must_use]
    pub const fn uri(&self) -> &Url {
        &self.uri
    }

    /// Label shown on the file's affordance.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Guessed content type, e.g. `text/plain`.
    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Whether the file existed when the reference was created.
    #[must_use]
    pub const fn exists(&self) -> bool {
        self.exists
    }
}

/// Turns a raw input into an absolute local path, without checking existence.
fn resolve_local_path(raw: &str, cwd: &Path) -> Result<PathBuf> {
    let Some(scheme) = uri_scheme(raw) else {
        return Ok(absolutize(raw, cwd));
    };

    if !scheme.eq_ignore_ascii_case("file") {
        return Err(PhoenixError::UnsupportedScheme {
            scheme: scheme.to_ascii_lowercase(),
            uri: raw.to_string(),
        });
    }

    let url = Url::parse(raw).map_err(|e| PhoenixError::InvalidUri {
        uri: raw.to_string(),
        reason: e.to_string(),
    })?;

    url.to_file_path().map_err(|()| PhoenixError::InvalidUri {
        uri: raw.to_string(),
        reason: "uri has no local path".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn relative_path_resolves_against_cwd() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), b"hello").unwrap();

        let file = FileReference::resolve("a.txt", dir.path()).unwrap();
        assert_eq!(file.path(), dir.path().join("a.txt"));
        assert_eq!(file.label(), "a.txt");
        assert_eq!(file.content_type(), "text/plain");
        assert_eq!(file.uri().scheme(), "file");
        assert!(file.exists());
    }

    #[test]
    fn file_uri_input_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("b c.txt");
        fs::write(&target, b"x").unwrap();
        let uri = Url::from_file_path(&target).unwrap();

        let file = FileReference::resolve(uri.as_str(), Path::new("/")).unwrap();
        assert_eq!(file.path(), target);
        assert_eq!(file.uri(), &uri);
        assert!(file.uri().as_str().ends_with("b%20c.txt"));
    }

    #[test]
    fn non_file_scheme_is_rejected() {
        let err = FileReference::resolve("https://example.com/a", Path::new("/")).unwrap_err();
        assert!(matches!(
            err,
            PhoenixError::UnsupportedScheme { ref scheme, ref uri }
                if scheme == "https" && uri == "https://example.com/a"
        ));
    }

    #[test]
    fn missing_file_reports_resolved_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileReference::resolve("./sub/../ghost.txt", dir.path()).unwrap_err();
        match err {
            PhoenixError::MissingFile { path } => assert_eq!(path, dir.path().join("ghost.txt")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn file_uri_with_remote_host_is_invalid() {
        let err = FileReference::resolve("file://server/share/a.txt", Path::new("/")).unwrap_err();
        assert!(matches!(err, PhoenixError::InvalidUri { .. }));
    }

    #[test]
    fn directory_gets_directory_content_type() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();

        let file = FileReference::resolve("docs", dir.path()).unwrap();
        assert_eq!(file.content_type(), content_type::DIRECTORY);
    }
}
