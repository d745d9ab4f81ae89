//! Engine tuning constants.
//!
//! These are compile-time values; the CLI does not override them.

/// Maximum number of documents returned by a single top-documents query.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Relevance values closer than this are treated as tied and ordered by rating.
pub const RELEVANCE_EPSILON: f64 = 1e-6;

/// Number of requests retained by the request history (one per minute of a day).
pub const REQUEST_HISTORY_CAPACITY: usize = 1440;
