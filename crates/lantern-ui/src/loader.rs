use std::fs;
use std::path::Path;

use crate::document::Document;
use crate::element::ElementRef;
use crate::error::UiError;
use crate::factory::Factory;

/// Reads documents from storage and delegates to the [`Factory`].
///
/// This is the designated error boundary: unreadable files, malformed
/// documents, and factory failures all become a logged diagnostic plus a
/// `None` result. A failed load is "this attempt failed", never a crash —
/// the caller keeps whatever tree it already had.
pub struct Loader {
    factory: Factory,
}

impl Loader {
    pub fn new(factory: Factory) -> Self {
        Self { factory }
    }

    /// Loads and builds a tree from the document at `path`; `None` on any
    /// failure, with the cause logged.
    pub fn load_from_file(&self, path: impl AsRef<Path>) -> Option<ElementRef> {
        self.report(self.try_load_from_file(path.as_ref()))
    }

    /// Builds a tree from document source text; `None` on any failure.
    pub fn load_from_str(&self, src: &str) -> Option<ElementRef> {
        self.report(self.try_load_from_str(src, "<inline>"))
    }

    /// Builds a tree from an already-parsed document; `None` on failure.
    pub fn load_from_document(&self, doc: &Document) -> Option<ElementRef> {
        self.report(self.factory.create(doc))
    }

    /// Like [`load_from_file`](Self::load_from_file) but surfaces the error
    /// instead of logging it.
    pub fn try_load_from_file(&self, path: &Path) -> Result<ElementRef, UiError> {
        let src = fs::read_to_string(path).map_err(|e| UiError::DocumentUnreadable {
            path: path.display().to_string(),
            detail: e.to_string(),
        })?;
        self.try_load_from_str(&src, &path.display().to_string())
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn try_load_from_str(&self, src: &str, origin: &str) -> Result<ElementRef, UiError> {
        let doc: Document = serde_json::from_str(src).map_err(|e| UiError::DocumentParse {
            path: origin.to_string(),
            detail: e.to_string(),
        })?;
        self.factory.create(&doc)
    }

    fn report(&self, result: Result<ElementRef, UiError>) -> Option<ElementRef> {
        match result {
            Ok(root) => Some(root),
            Err(e) => {
                log::error!("ui loader: {e}");
                None
            }
        }
    }
}
