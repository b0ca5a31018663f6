use std::fmt;

/// Errors raised by the element tree, the factory, and the loader.
///
/// Factory errors propagate up through recursive construction and are caught
/// exactly once, at the [`crate::loader::Loader`] boundary, where they become
/// a logged "this load failed" outcome. Nothing in this enum is ever fatal to
/// the running application.
#[derive(Debug, Clone, PartialEq)]
pub enum UiError {
    /// A sibling with the same name already exists under this parent.
    DuplicateName { name: String },
    /// No child with this name exists under this parent.
    NotFound { name: String },
    /// The child exists but is a different widget kind than requested.
    TypeMismatch { name: String, expected: &'static str },
    /// A shader/mesh/color key named by a document is missing from the
    /// caller-supplied resource tables.
    ResourceNotFound {
        kind: &'static str,
        key: String,
        element: String,
    },
    /// A document `type` value the factory does not recognize.
    UnknownElementType { type_name: String },
    /// The document file could not be opened or read.
    DocumentUnreadable { path: String, detail: String },
    /// The document text is not a valid document.
    DocumentParse { path: String, detail: String },
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::DuplicateName { name } => {
                write!(f, "child with name '{name}' already exists")
            }
            UiError::NotFound { name } => {
                write!(f, "child with name '{name}' does not exist")
            }
            UiError::TypeMismatch { name, expected } => {
                write!(f, "child '{name}' is not a {expected}")
            }
            UiError::ResourceNotFound { kind, key, element } => {
                write!(f, "{kind} '{key}' not found while building element '{element}'")
            }
            UiError::UnknownElementType { type_name } => {
                write!(f, "unknown element type '{type_name}'")
            }
            UiError::DocumentUnreadable { path, detail } => {
                write!(f, "failed to read document {path}: {detail}")
            }
            UiError::DocumentParse { path, detail } => {
                write!(f, "failed to parse document {path}: {detail}")
            }
        }
    }
}

impl std::error::Error for UiError {}
