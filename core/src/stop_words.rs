//! Stop words are fixed when a server is built and never change afterwards.

use crate::error::{Result, SearchError};
use crate::tokenizer::{is_valid_word, split_into_words};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    /// Parse a space separated list of stop words.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_words([text])
    }

    /// Build from a collection of entries. Each entry is split on spaces, so
    /// blank entries add nothing. Minus signs carry no meaning here.
    pub fn from_words<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = BTreeSet::new();
        for entry in entries {
            let entry = entry.as_ref();
            if !is_valid_word(entry) {
                tracing::debug!(word = entry, "rejected stop word");
                return Err(SearchError::InvalidStopWord { word: entry.to_string() });
            }
            words.extend(split_into_words(entry).into_iter().map(str::to_string));
        }
        Ok(Self { words })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
