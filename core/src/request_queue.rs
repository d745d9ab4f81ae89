//! Sliding window of recent search requests.
//!
//! Only remembers whether each request found anything. The window holds the
//! last [`REQUEST_HISTORY_CAPACITY`] requests; older ones fall out.

use crate::config::REQUEST_HISTORY_CAPACITY;
use crate::document::{DocId, Document, DocumentStatus, Rating};
use crate::error::Result;
use crate::server::SearchServer;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy)]
struct QueryResult {
    has_result: bool,
}

pub struct RequestQueue<'a> {
    server: &'a SearchServer,
    requests: VecDeque<QueryResult>,
    capacity: usize,
    no_result_requests: usize,
}

impl<'a> RequestQueue<'a> {
    pub fn new(server: &'a SearchServer) -> Self {
        Self::with_capacity(server, REQUEST_HISTORY_CAPACITY)
    }

    pub fn with_capacity(server: &'a SearchServer, capacity: usize) -> Self {
        Self { server, requests: VecDeque::with_capacity(capacity), capacity, no_result_requests: 0 }
    }

    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<Document>> {
        self.add_find_request_by_status(raw_query, DocumentStatus::Actual)
    }

    pub fn add_find_request_by_status(&mut self, raw_query: &str, status: DocumentStatus) -> Result<Vec<Document>> {
        self.add_find_request_with(raw_query, move |_, document_status, _| document_status == status)
    }

    /// Run the search and record whether it returned anything. A query that
    /// fails validation is not recorded.
    pub fn add_find_request_with<P>(&mut self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: Fn(DocId, DocumentStatus, Rating) -> bool,
    {
        let found = self.server.find_top_documents_with(raw_query, predicate)?;
        self.record(!found.is_empty());
        Ok(found)
    }

    fn record(&mut self, has_result: bool) {
        if self.capacity == 0 {
            return;
        }
        if self.requests.len() == self.capacity {
            if let Some(oldest) = self.requests.pop_front() {
                if !oldest.has_result {
                    self.no_result_requests -= 1;
                }
            }
        }
        if !has_result {
            self.no_result_requests += 1;
        }
        self.requests.push_back(QueryResult { has_result });
    }

    /// Requests in the current window that found nothing.
    pub fn no_result_requests(&self) -> usize {
        self.no_result_requests
    }

    /// Requests currently retained.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}
