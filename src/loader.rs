//! Markdown page loading.
//!
//! The only fallible entry point of the crate: reads a file whole,
//! checks that it is UTF-8 and runs it through the transformer.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::Utf8Error;

use thiserror::Error;

use crate::page::{Page, StyleHook};

/// Reasons a markdown page cannot be loaded.
///
/// Both are terminal for the current render; nothing is produced.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The path does not resolve to a readable file.
    #[error("markdown file not found: {}", .path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file content is not valid UTF-8.
    #[error("invalid UTF-8 encoding in {}", .path.display())]
    InvalidEncoding {
        path: PathBuf,
        #[source]
        source: Utf8Error,
    },
}

impl LoadError {
    /// Path of the source that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            Self::SourceNotFound { path, .. } | Self::InvalidEncoding { path, .. } => path,
        }
    }
}

/// A rendered markdown page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownPage {
    /// Display title: the file name without its extension.
    pub title: String,
    /// The rendered HTML fragment.
    pub html: String,
}

/// Load and render the markdown file at `path`.
pub fn load_page<H>(path: impl AsRef<Path>, hook: &mut H) -> Result<MarkdownPage, LoadError>
where
    H: StyleHook + ?Sized,
{
    let path = path.as_ref();
    log::debug!("loading markdown page {}", path.display());

    let bytes = fs::read(path).map_err(|source| {
        log::warn!("cannot read {}: {source}", path.display());
        LoadError::SourceNotFound {
            path: path.to_path_buf(),
            source,
        }
    })?;

    load_bytes(path, &bytes, hook)
}

/// Render markdown that was already read from `path`.
///
/// `path` names the source for the title and for errors; it is not read.
pub fn load_bytes<H>(path: impl AsRef<Path>, bytes: &[u8], hook: &mut H) -> Result<MarkdownPage, LoadError>
where
    H: StyleHook + ?Sized,
{
    let path = path.as_ref();
    let text = std::str::from_utf8(bytes).map_err(|source| {
        log::warn!(
            "{} is not valid UTF-8 (valid up to byte {})",
            path.display(),
            source.valid_up_to()
        );
        LoadError::InvalidEncoding {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let title = page_title(path);
    let html = crate::to_html_with_hook(text, hook);
    log::debug!("rendered {title:?}: {} bytes in, {} bytes out", bytes.len(), html.len());

    Ok(MarkdownPage { title, html })
}

/// Load the markdown file at `path` into `page`: sets the page title and
/// fills the content region.
pub fn load_into_page(path: impl AsRef<Path>, page: &mut Page) -> Result<(), LoadError> {
    let rendered = load_page(path, page)?;
    page.set_title(rendered.title);
    page.push_content(&rendered.html);
    Ok(())
}

/// Display title for a source path: the file name with its extension
/// stripped.
pub fn page_title(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
