//! In-memory document search with TF-IDF ranking, stop words and minus words.

pub mod config;
pub mod document;
pub mod error;
pub mod index;
pub mod paginator;
pub mod query;
pub mod ranking;
pub mod request_queue;
pub mod server;
pub mod stop_words;
pub mod tokenizer;

pub use document::{DocId, Document, DocumentStatus, MatchedDocument, Rating};
pub use error::{ErrorKind, Result, SearchError};
pub use paginator::{paginate, Page, Paginator};
pub use request_queue::RequestQueue;
pub use server::SearchServer;
pub use stop_words::StopWords;
