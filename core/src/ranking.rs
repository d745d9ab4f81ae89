use crate::config::RELEVANCE_EPSILON;
use crate::document::Document;

/// `ln(N / df)`. Callers only ask for terms present in the index, so
/// `containing` is never zero.
pub fn inverse_document_freq(total_documents: usize, containing: usize) -> f64 {
    (total_documents as f64 / containing as f64).ln()
}

/// Order hits by relevance, highest first. A hit moves ahead of its
/// neighbour only when the two are closer than [`RELEVANCE_EPSILON`] and it
/// has the higher rating, so every adjacent pair is either clearly ordered by
/// relevance or a near tie ordered by rating. Exact ties fall back to id.
pub fn sort_by_relevance(documents: &mut [Document]) {
    documents.sort_by(|lhs, rhs| rhs.relevance.total_cmp(&lhs.relevance).then(lhs.id.cmp(&rhs.id)));
    // Everything ahead of `i` is at least as relevant as it, so stopping at a
    // neighbour more than epsilon away keeps that pair in relevance order.
    for i in 1..documents.len() {
        let mut j = i;
        while j > 0 && outranks_near_tie(&documents[j], &documents[j - 1]) {
            documents.swap(j - 1, j);
            j -= 1;
        }
    }
}

fn outranks_near_tie(doc: &Document, ahead: &Document) -> bool {
    (doc.relevance - ahead.relevance).abs() < RELEVANCE_EPSILON && doc.rating > ahead.rating
}

/// Whether `lhs` may sit directly before `rhs` in a ranked list.
pub fn is_ranked_pair(lhs: &Document, rhs: &Document) -> bool {
    if (lhs.relevance - rhs.relevance).abs() < RELEVANCE_EPSILON {
        lhs.rating >= rhs.rating
    } else {
        lhs.relevance > rhs.relevance
    }
}

/// Sort and keep the best `limit` hits.
pub fn top_documents(mut documents: Vec<Document>, limit: usize) -> Vec<Document> {
    sort_by_relevance(&mut documents);
    documents.truncate(limit);
    documents
}
