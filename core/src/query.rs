use crate::error::{Result, SearchError};
use crate::stop_words::StopWords;
use crate::tokenizer::{split_into_words, validate_query_word};
use std::collections::BTreeSet;

/// A parsed query: words a document must contain to score, and words that
/// exclude it outright. Both sets are stop-word free and disjoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub plus_words: BTreeSet<String>,
    pub minus_words: BTreeSet<String>,
}

struct QueryWord<'a> {
    data: &'a str,
    is_minus: bool,
}

fn parse_query_word(word: &str) -> Result<QueryWord<'_>> {
    validate_query_word(word).map_err(|reason| SearchError::InvalidQueryWord { word: word.to_string(), reason })?;
    Ok(match word.strip_prefix('-') {
        Some(rest) => QueryWord { data: rest, is_minus: true },
        None => QueryWord { data: word, is_minus: false },
    })
}

/// Parse raw query text. The first malformed word aborts parsing.
pub fn parse_query(text: &str, stop_words: &StopWords) -> Result<Query> {
    let mut query = Query::default();
    for raw in split_into_words(text) {
        let word = parse_query_word(raw)?;
        if stop_words.contains(word.data) {
            continue;
        }
        if word.is_minus {
            query.minus_words.insert(word.data.to_string());
        } else {
            query.plus_words.insert(word.data.to_string());
        }
    }
    let Query { plus_words, minus_words } = &mut query;
    plus_words.retain(|w| !minus_words.contains(w));
    tracing::trace!(plus = query.plus_words.len(), minus = query.minus_words.len(), "parsed query");
    Ok(query)
}
