//! The set of files a drag source can offer.
//!
//! [`FileRegistry::build`] resolves every raw input once at startup. Inputs that
//! are not existing local files are dropped and reported; the survivors keep
//! command-line order. Repeated arguments are kept as given, not deduplicated.

use crate::domain::{FileReference, PhoenixError};
use std::path::Path;

/// An input that did not make it into the registry.
#[derive(Debug)]
pub struct RejectedInput {
    /// The raw command-line input.
    pub input: String,
    /// Why it was dropped.
    pub reason: PhoenixError,
}

/// Ordered, read-only collection of validated file references.
#[derive(Debug, Default)]
pub struct FileRegistry {
    files: Vec<FileReference>,
    rejected: Vec<RejectedInput>,
}

impl FileRegistry {
    /// Resolves `inputs` against `cwd` and keeps the existing local files.
    ///
    /// Unsupported schemes and invalid URIs are reported at info level,
    /// missing files at warn level. Neither aborts the build.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use phoenix::dnd::FileRegistry;
    /// use std::path::Path;
    ///
    /// let registry = FileRegistry::build(&["a.txt", "http://x/y"], Path::new("/work"));
    /// assert_eq!(registry.rejected().len(), 1);
    /// ```
    pub fn build<S: AsRef<str>>(inputs: &[S], cwd: &Path) -> Self {
        let _span = tracing::debug_span!("registry_build",
            inputs = inputs.len(),
            cwd = %cwd.display()
        ).entered();

        let mut registry = Self::default();

        for input in inputs {
            let input = input.as_ref();
            match FileReference::resolve(input, cwd) {
                Ok(file) => {
                    tracing::debug!(
                        path = %file.path().display(),
                        content_type = %file.content_type(),
                        "file registered"
                    );
                    registry.files.push(file);
                }
                Err(reason) => {
                    match &reason {
                        PhoenixError::MissingFile { path } => {
                            tracing::warn!(path = %path.display(), "local file doesn't exist, dropping");
                        }
                        PhoenixError::UnsupportedScheme { scheme, uri } => {
                            tracing::info!(scheme = %scheme, uri = %uri, "uri scheme not supported, dropping");
                        }
                        other => {
                            tracing::info!(input = %input, error = %other, "input rejected, dropping");
                        }
                    }
                    registry.rejected.push(RejectedInput {
                        input: input.to_string(),
                        reason,
                    });
                }
            }
        }

        tracing::debug!(
            accepted = registry.files.len(),
            rejected = registry.rejected.len(),
            "registry built"
        );
        registry
    }

    /// All accepted files in input order.
    #[must_use]
    pub fn files(&self) -> &[FileReference] {
        &self.files
    }

    /// The file at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&FileReference> {
        self.files.get(index)
    }

    /// Number of accepted files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether no input survived validation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Inputs dropped during the build, in input order.
    #[must_use]
    pub fn rejected(&self) -> &[RejectedInput] {
        &self.rejected
    }
}
