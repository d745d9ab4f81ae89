use crate::error::QueryWordError;

/// Split text into words on the space character. Runs of spaces collapse, so
/// empty or all-space input yields no words.
pub fn split_into_words(text: &str) -> Vec<&str> {
    text.split(' ').filter(|word| !word.is_empty()).collect()
}

/// A word is valid when it holds no control characters (codes 0 to 31).
pub fn is_valid_word(word: &str) -> bool {
    !word.bytes().any(|b| b < b' ')
}

/// Query words must additionally be well-formed minus markers. Rules are
/// checked in order and the first failure is reported.
pub fn validate_query_word(word: &str) -> Result<(), QueryWordError> {
    if !is_valid_word(word) {
        return Err(QueryWordError::ControlCharacter);
    }
    if word == "-" {
        return Err(QueryWordError::DanglingMinus);
    }
    if word.starts_with("--") {
        return Err(QueryWordError::DoubleMinus);
    }
    Ok(())
}
