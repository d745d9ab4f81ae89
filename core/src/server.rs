use crate::config::MAX_RESULT_DOCUMENT_COUNT;
use crate::document::{average_rating, DocId, Document, DocumentStatus, Rating};
use crate::error::{Result, SearchError};
use crate::index::InvertedIndex;
use crate::query::{parse_query, Query};
use crate::ranking::{inverse_document_freq, top_documents};
use crate::stop_words::StopWords;
use crate::tokenizer::{is_valid_word, split_into_words};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Copy)]
struct DocumentData {
    rating: Rating,
    status: DocumentStatus,
}

/// In-memory search engine. Documents are append-only; queries borrow the
/// server immutably, so concurrent use needs an external lock.
#[derive(Debug, Clone)]
pub struct SearchServer {
    stop_words: StopWords,
    index: InvertedIndex,
    documents: HashMap<DocId, DocumentData>,
    document_ids: Vec<DocId>,
}

impl SearchServer {
    /// Build a server from space separated stop words.
    pub fn new(stop_words_text: &str) -> Result<Self> {
        Ok(Self::with_stop_words(StopWords::from_text(stop_words_text)?))
    }

    /// Build a server from any collection of stop-word entries.
    pub fn from_stop_words<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::with_stop_words(StopWords::from_words(stop_words)?))
    }

    pub fn with_stop_words(stop_words: StopWords) -> Self {
        Self { stop_words, index: InvertedIndex::new(), documents: HashMap::new(), document_ids: Vec::new() }
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Index a document. On error nothing is changed.
    pub fn add_document(
        &mut self,
        document_id: DocId,
        document: &str,
        status: DocumentStatus,
        ratings: &[Rating],
    ) -> Result<()> {
        if document_id < 0 {
            tracing::debug!(document_id, "rejected document with negative id");
            return Err(SearchError::NegativeDocumentId { id: document_id });
        }
        if self.documents.contains_key(&document_id) {
            tracing::debug!(document_id, "rejected duplicate document");
            return Err(SearchError::DuplicateDocumentId { id: document_id });
        }
        let all_words = split_into_words(document);
        if !all_words.iter().all(|word| is_valid_word(word)) {
            tracing::debug!(document_id, "rejected document with control characters");
            return Err(SearchError::InvalidDocumentText { id: document_id });
        }

        let words: Vec<&str> = all_words.into_iter().filter(|word| !self.stop_words.contains(word)).collect();
        self.index.add_document(document_id, &words);
        self.documents.insert(document_id, DocumentData { rating: average_rating(ratings), status });
        self.document_ids.push(document_id);
        tracing::debug!(document_id, words = words.len(), terms = self.index.num_terms(), %status, "indexed document");
        Ok(())
    }

    /// Top documents with status [`DocumentStatus::Actual`].
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_by_status(raw_query, DocumentStatus::Actual)
    }

    pub fn find_top_documents_by_status(&self, raw_query: &str, status: DocumentStatus) -> Result<Vec<Document>> {
        self.find_top_documents_with(raw_query, move |_, document_status, _| document_status == status)
    }

    /// Top documents among those accepted by `predicate(id, status, rating)`,
    /// at most [`MAX_RESULT_DOCUMENT_COUNT`] of them.
    pub fn find_top_documents_with<P>(&self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: Fn(DocId, DocumentStatus, Rating) -> bool,
    {
        let query = parse_query(raw_query, &self.stop_words)?;
        let matched = self.find_all_documents(&query, predicate);
        let total = matched.len();
        let top = top_documents(matched, MAX_RESULT_DOCUMENT_COUNT);
        tracing::trace!(total, returned = top.len(), "ranked documents");
        Ok(top)
    }

    fn find_all_documents<P>(&self, query: &Query, predicate: P) -> Vec<Document>
    where
        P: Fn(DocId, DocumentStatus, Rating) -> bool,
    {
        let mut document_to_relevance: BTreeMap<DocId, f64> = BTreeMap::new();
        for word in &query.plus_words {
            let Some(postings) = self.index.postings(word) else { continue };
            let idf = inverse_document_freq(self.document_count(), postings.len());
            for (&document_id, &term_freq) in postings {
                let Some(data) = self.documents.get(&document_id) else { continue };
                if predicate(document_id, data.status, data.rating) {
                    *document_to_relevance.entry(document_id).or_insert(0.0) += term_freq * idf;
                }
            }
        }

        for word in &query.minus_words {
            let Some(postings) = self.index.postings(word) else { continue };
            for document_id in postings.keys() {
                document_to_relevance.remove(document_id);
            }
        }

        document_to_relevance
            .into_iter()
            .filter_map(|(id, relevance)| {
                self.documents.get(&id).map(|data| Document::new(id, relevance, data.rating))
            })
            .collect()
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Id of the document at `index` in insertion order.
    pub fn document_id(&self, index: i32) -> Result<DocId> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.document_ids.get(i).copied())
            .ok_or(SearchError::DocumentIndexOutOfRange { index, count: self.document_ids.len() })
    }

    /// Document ids in insertion order.
    pub fn document_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.document_ids.iter().copied()
    }

    /// Plus words of `raw_query` found in the document, and its status. The
    /// word list is empty when the document contains any minus word.
    pub fn match_document(&self, raw_query: &str, document_id: DocId) -> Result<(Vec<String>, DocumentStatus)> {
        let query = parse_query(raw_query, &self.stop_words)?;
        let data = self.documents.get(&document_id).ok_or(SearchError::DocumentNotFound { id: document_id })?;

        if query.minus_words.iter().any(|word| self.index.contains(word, document_id)) {
            return Ok((Vec::new(), data.status));
        }
        let words = query
            .plus_words
            .into_iter()
            .filter(|word| self.index.contains(word, document_id))
            .collect();
        Ok((words, data.status))
    }
}
