use crate::document::DocId;
use std::collections::{BTreeMap, HashMap};

/// Postings for one term: document id -> term frequency in that document.
pub type Postings = BTreeMap<DocId, f64>;

/// Term -> documents containing it. Holds no document metadata.
#[derive(Debug, Default, Clone)]
pub struct InvertedIndex {
    postings: HashMap<String, Postings>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Record the already filtered `words` of a new document. Each occurrence
    /// adds `1 / words.len()` to the word's frequency. A document with no
    /// words leaves the index untouched.
    pub fn add_document(&mut self, doc_id: DocId, words: &[&str]) {
        if words.is_empty() {
            return;
        }
        let inv_word_count = 1.0 / words.len() as f64;
        for word in words {
            *self
                .postings
                .entry((*word).to_string())
                .or_default()
                .entry(doc_id)
                .or_insert(0.0) += inv_word_count;
        }
    }

    pub fn postings(&self, word: &str) -> Option<&Postings> {
        self.postings.get(word)
    }

    /// Number of documents containing `word`.
    pub fn document_frequency(&self, word: &str) -> usize {
        self.postings.get(word).map_or(0, BTreeMap::len)
    }

    pub fn contains(&self, word: &str, doc_id: DocId) -> bool {
        self.postings.get(word).is_some_and(|p| p.contains_key(&doc_id))
    }

    pub fn num_terms(&self) -> usize {
        self.postings.len()
    }
}
