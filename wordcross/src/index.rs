use std::collections::BTreeMap;

use tracing::debug;

use crate::{InvalidWord, LetterLocations, Orientation, Word, WordOrientation};

/// The [`LetterLocations`] of every word in both orientations.
///
/// Iteration is in [`WordOrientation`] order: by word text, and for the same
/// text, [`Horizontal`](Orientation::Horizontal) before
/// [`Vertical`](Orientation::Vertical). This is the order in which
/// [`Self::placements_for()`] visits candidates.
#[derive(Clone, Debug, Default)]
pub struct IndexTable {
    entries: BTreeMap<WordOrientation, LetterLocations>,
}

impl IndexTable {
    /// Indexes both orientations of every word.
    ///
    /// Panics if the same word occurs twice in `words`.
    pub fn new(words: &[Word]) -> Self {
        let mut entries = BTreeMap::new();
        for word in words {
            for orientation in Orientation::ALL {
                let key = WordOrientation::new(word.clone(), orientation);
                let locations = LetterLocations::of(&key);
                let previous = entries.insert(key, locations);
                assert!(previous.is_none(), "Word '{}' occurs twice", word);
            }
        }
        debug!(num_words = words.len(), num_entries = entries.len(), "Built index table");
        Self { entries }
    }

    /// Validates every string with [`Word::new()`] and indexes the result.
    ///
    /// Panics on duplicates, like [`Self::new()`].
    pub fn from_strs(words: &[&str]) -> Result<Self, InvalidWord> {
        let words = words
            .iter()
            .map(|&text| Word::new(text))
            .collect::<Result<Vec<Word>, InvalidWord>>()?;
        Ok(Self::new(&words))
    }

    pub fn get(&self, word: &WordOrientation) -> Option<&LetterLocations> {
        self.entries.get(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&WordOrientation, &LetterLocations)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &WordOrientation> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{word, RelativeOffset};

    #[test]
    fn both_orientations_of_every_word() {
        let table = IndexTable::from_strs(&["CAT", "DOG"]).unwrap();
        assert_eq!(table.len(), 4);
        let keys: Vec<_> = table.keys().cloned().collect();
        assert_eq!(
            keys,
            vec![
                word!("CAT", Horizontal),
                word!("CAT", Vertical),
                word!("DOG", Horizontal),
                word!("DOG", Vertical),
            ]
        );
        assert_eq!(
            table.get(&word!("DOG", Vertical)).unwrap().get('G'),
            &[RelativeOffset::new(0, 2)]
        );
    }

    #[test]
    #[should_panic(expected = "occurs twice")]
    fn duplicate_word_panics() {
        let _ = IndexTable::from_strs(&["CAT", "DOG", "CAT"]);
    }

    #[test]
    fn case_matters() {
        let table = IndexTable::from_strs(&["cat", "CAT"]).unwrap();
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn invalid_word_is_an_error() {
        assert_eq!(
            IndexTable::from_strs(&["CAT", ""]).unwrap_err(),
            InvalidWord::Empty
        );
    }
}
