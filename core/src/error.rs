use crate::document::DocId;
use std::fmt;

pub type Result<T> = std::result::Result<T, SearchError>;

/// Coarse classification of a [`SearchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed a malformed id, text, stop word or query.
    InvalidArgument,
    /// The caller referred to a document position or id that does not exist.
    OutOfRange,
}

/// Why a query word was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryWordError {
    ControlCharacter,
    DanglingMinus,
    DoubleMinus,
}

impl fmt::Display for QueryWordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            QueryWordError::ControlCharacter => "contains a control character (codes 0 to 31)",
            QueryWordError::DanglingMinus => "is a lone minus sign with no word after it",
            QueryWordError::DoubleMinus => "starts with more than one minus sign",
        };
        f.write_str(msg)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("attempt to add a document with negative id {id}")]
    NegativeDocumentId { id: DocId },
    #[error("attempt to add a document with id {id} which was already added")]
    DuplicateDocumentId { id: DocId },
    #[error("text of document {id} contains control characters (codes 0 to 31)")]
    InvalidDocumentText { id: DocId },
    #[error("stop word {word:?} contains control characters (codes 0 to 31)")]
    InvalidStopWord { word: String },
    #[error("query word {word:?} {reason}")]
    InvalidQueryWord { word: String, reason: QueryWordError },
    #[error("document index {index} is out of range (document count is {count})")]
    DocumentIndexOutOfRange { index: i32, count: usize },
    #[error("document {id} does not exist")]
    DocumentNotFound { id: DocId },
}

impl SearchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SearchError::NegativeDocumentId { .. }
            | SearchError::DuplicateDocumentId { .. }
            | SearchError::InvalidDocumentText { .. }
            | SearchError::InvalidStopWord { .. }
            | SearchError::InvalidQueryWord { .. } => ErrorKind::InvalidArgument,
            SearchError::DocumentIndexOutOfRange { .. } | SearchError::DocumentNotFound { .. } => {
                ErrorKind::OutOfRange
            }
        }
    }
}
