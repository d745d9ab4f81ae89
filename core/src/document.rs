use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type DocId = i32;
pub type Rating = i32;

/// Lifecycle state of an indexed document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    #[default]
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentStatus::Actual => "ACTUAL",
            DocumentStatus::Irrelevant => "IRRELEVANT",
            DocumentStatus::Banned => "BANNED",
            DocumentStatus::Removed => "REMOVED",
        };
        f.write_str(name)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown document status {0:?} (expected actual, irrelevant, banned or removed)")]
pub struct ParseStatusError(pub String);

impl FromStr for DocumentStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "actual" => Ok(DocumentStatus::Actual),
            "irrelevant" => Ok(DocumentStatus::Irrelevant),
            "banned" => Ok(DocumentStatus::Banned),
            "removed" => Ok(DocumentStatus::Removed),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

/// A ranked search hit. `relevance` is specific to the query that produced it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub relevance: f64,
    pub rating: Rating,
}

impl Document {
    pub fn new(id: DocId, relevance: f64, rating: Rating) -> Self {
        Self { id, relevance, rating }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.id, self.relevance, self.rating
        )
    }
}

/// The words of a query found in one document, as reported by a match request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedDocument {
    pub document_id: DocId,
    pub words: Vec<String>,
    pub status: DocumentStatus,
}

impl fmt::Display for MatchedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ document_id = {}, status = {}, words =", self.document_id, self.status)?;
        for word in &self.words {
            write!(f, " {word}")?;
        }
        f.write_str("}")
    }
}

/// Integer mean of `ratings`, truncated toward zero. An empty slice rates 0.
pub fn average_rating(ratings: &[Rating]) -> Rating {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    // The mean of i32 values always fits back into i32.
    (sum / ratings.len() as i64) as Rating
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_rating_truncates_toward_zero() {
        assert_eq!(average_rating(&[]), 0);
        assert_eq!(average_rating(&[7, 2, 7]), 5);
        assert_eq!(average_rating(&[-1, -2]), -1);
        assert_eq!(average_rating(&[-7, 2]), -2);
        assert_eq!(average_rating(&[i32::MAX, i32::MAX]), i32::MAX);
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("Banned".parse::<DocumentStatus>(), Ok(DocumentStatus::Banned));
        assert_eq!("REMOVED".parse::<DocumentStatus>(), Ok(DocumentStatus::Removed));
        assert!("deleted".parse::<DocumentStatus>().is_err());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&DocumentStatus::Irrelevant).unwrap();
        assert_eq!(json, "\"irrelevant\"");
        let back: DocumentStatus = serde_json::from_str("\"actual\"").unwrap();
        assert_eq!(back, DocumentStatus::Actual);
    }

    #[test]
    fn document_display() {
        let doc = Document::new(3, 0.5, 4);
        assert_eq!(doc.to_string(), "{ document_id = 3, relevance = 0.5, rating = 4 }");
    }

    #[test]
    fn matched_document_display() {
        let matched = MatchedDocument {
            document_id: 1,
            words: vec!["cat".into(), "tail".into()],
            status: DocumentStatus::Actual,
        };
        assert_eq!(matched.to_string(), "{ document_id = 1, status = ACTUAL, words = cat tail}");
    }
}
