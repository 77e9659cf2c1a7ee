use crate::MAX_WORD_LEN;

/// The error type for [`Word::new()`](crate::Word::new).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidWord {
    Empty,
    TooLong { len: usize },
}

impl std::error::Error for InvalidWord {}

impl std::fmt::Display for InvalidWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidWord::Empty => write!(f, "A word must have at least one letter"),
            InvalidWord::TooLong { len } => write!(
                f,
                "A word has {} letters, but at most {} fit on the grid",
                len, MAX_WORD_LEN
            ),
        }
    }
}

/// The error type for [`sample_words()`](crate::sample_words).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotEnoughWords {
    pub requested: usize,
    pub available: usize,
}

impl std::error::Error for NotEnoughWords {}

impl std::fmt::Display for NotEnoughWords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Requested {} words, but the word list only has {}",
            self.requested, self.available
        )
    }
}
