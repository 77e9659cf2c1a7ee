use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{InvalidWord, RelativeOffset, MAX_WORD_LEN};

/// The direction in which a word is laid out on the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Left to right, along `dx`.
    #[serde(rename = "Right")]
    Horizontal,
    /// Top to bottom, along `dy`.
    #[serde(rename = "Down")]
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "Right"),
            Orientation::Vertical => write!(f, "Down"),
        }
    }
}

/// The error type for the [`FromStr`] instance of [`Orientation`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownOrientation(pub String);

impl std::error::Error for UnknownOrientation {}

impl std::fmt::Display for UnknownOrientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' is not an orientation", self.0)
    }
}

impl FromStr for Orientation {
    type Err = UnknownOrientation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Right" | "Horizontal" | "H" => Ok(Orientation::Horizontal),
            "Down" | "Vertical" | "V" => Ok(Orientation::Vertical),
            _ => Err(UnknownOrientation(String::from(s))),
        }
    }
}

/// The text of a word that is known to fit on the grid.
///
/// Letters are Unicode scalar values and are compared exactly, so `"Cat"` and
/// `"CAT"` are different words.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

impl Word {
    /// Validates `text`, which must have between 1 and [`MAX_WORD_LEN`] letters.
    pub fn new(text: impl Into<String>) -> Result<Self, InvalidWord> {
        let text = text.into();
        let len = text.chars().count();
        if len == 0 {
            return Err(InvalidWord::Empty);
        }
        if len > MAX_WORD_LEN {
            return Err(InvalidWord::TooLong { len });
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The number of letters, which is never zero.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }
}

impl TryFrom<String> for Word {
    type Error = InvalidWord;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Word::new(text)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> String {
        word.0
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A word together with the direction it is laid out in.
///
/// This is the key of both the [`IndexTable`](crate::IndexTable) and the
/// [`PlacementMap`](crate::PlacementMap). The same text in the two orientations
/// gives two distinct keys.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WordOrientation {
    pub word: Word,
    pub orientation: Orientation,
}

impl WordOrientation {
    pub fn new(word: Word, orientation: Orientation) -> Self {
        Self { word, orientation }
    }

    /// Every letter of the word together with its offset from the word's origin.
    pub fn cells(&self) -> impl Iterator<Item = (RelativeOffset, char)> + '_ {
        self.word
            .as_str()
            .chars()
            .enumerate()
            .map(|(i, letter)| (RelativeOffset::along(self.orientation, i), letter))
    }
}

impl std::fmt::Display for WordOrientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.word, self.orientation)
    }
}

/// Shorthand for creating a [`WordOrientation`] from a literal.
///
/// The second argument is a variant of [`Orientation`].
/// ```
/// # use wordcross::{word, Orientation, Word, WordOrientation};
/// assert_eq!(
///     word!("CAT", Vertical),
///     WordOrientation::new(Word::new("CAT").unwrap(), Orientation::Vertical)
/// );
/// ```
#[macro_export]
macro_rules! word {
    ($text:literal, $orientation:ident) => {
        $crate::WordOrientation::new(
            $crate::Word::new($text).expect("Invalid word given to word! macro"),
            $crate::Orientation::$orientation,
        )
    };
}
// The import is for using the macro in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use word;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_overlong_words() {
        assert_eq!(Word::new(""), Err(InvalidWord::Empty));
        assert!(Word::new("A".repeat(MAX_WORD_LEN)).is_ok());
        assert_eq!(
            Word::new("A".repeat(MAX_WORD_LEN + 1)),
            Err(InvalidWord::TooLong {
                len: MAX_WORD_LEN + 1
            })
        );
    }

    #[test]
    fn length_counts_letters_not_bytes() {
        let word = Word::new("ÉTÉ").unwrap();
        assert_eq!(word.len(), 3);
        assert!(Word::new("É".repeat(MAX_WORD_LEN)).is_ok());
    }

    #[test]
    fn orientation_is_part_of_identity() {
        assert_ne!(word!("CAT", Horizontal), word!("CAT", Vertical));
        assert_eq!(word!("CAT", Horizontal), word!("CAT", Horizontal));
        assert!(word!("CAT", Horizontal) < word!("CAT", Vertical));
    }

    #[test]
    fn cells_follow_orientation() {
        let cells: Vec<_> = word!("AB", Vertical).cells().collect();
        assert_eq!(
            cells,
            vec![
                (RelativeOffset::new(0, 0), 'A'),
                (RelativeOffset::new(0, 1), 'B')
            ]
        );
    }

    #[test]
    fn orientation_from_str() {
        assert_eq!("Right".parse::<Orientation>(), Ok(Orientation::Horizontal));
        assert_eq!("V".parse::<Orientation>(), Ok(Orientation::Vertical));
        assert!("Diagonal".parse::<Orientation>().is_err());
    }

    #[test]
    fn serde_rejects_invalid_words() {
        assert!(serde_json::from_str::<Word>("\"\"").is_err());
        assert_eq!(
            serde_json::from_str::<WordOrientation>(r#"{"word":"CAT","orientation":"Down"}"#)
                .unwrap(),
            word!("CAT", Vertical)
        );
    }

    #[test]
    fn display() {
        assert_eq!(word!("CAT", Horizontal).to_string(), "(CAT,Right)");
    }
}
