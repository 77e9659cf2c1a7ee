use std::collections::BTreeMap;

use crate::{RelativeOffset, WordOrientation};

/// Where each letter of one [`WordOrientation`] sits, relative to the word's origin.
///
/// A letter that occurs several times has several offsets, in the order the
/// letters appear in the word.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LetterLocations(BTreeMap<char, Vec<RelativeOffset>>);

impl LetterLocations {
    pub fn of(word: &WordOrientation) -> Self {
        let mut map: BTreeMap<char, Vec<RelativeOffset>> = BTreeMap::new();
        for (offset, letter) in word.cells() {
            map.entry(letter).or_default().push(offset);
        }
        Self(map)
    }

    /// The offsets of `letter`, or an empty slice if the word doesn't contain it.
    pub fn get(&self, letter: char) -> &[RelativeOffset] {
        self.0.get(&letter).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates over the distinct letters in `char` order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &[RelativeOffset])> {
        self.0
            .iter()
            .map(|(&letter, offsets)| (letter, offsets.as_slice()))
    }

    /// The number of distinct letters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::{arbitrary::ArbitraryWord, word, Orientation};

    quickcheck! {
        fn every_index_exactly_once(input: ArbitraryWord) -> bool {
            let word = input.0;
            let locations = LetterLocations::of(&word);
            let mut all: Vec<RelativeOffset> = locations
                .iter()
                .flat_map(|(_, offsets)| offsets.iter().copied())
                .collect();
            all.sort();
            let expected: Vec<RelativeOffset> = (0..word.word.len())
                .map(|i| RelativeOffset::along(word.orientation, i))
                .collect();
            all == expected
        }

        fn offsets_increase_along_the_axis(input: ArbitraryWord) -> bool {
            let word = input.0;
            let locations = LetterLocations::of(&word);
            let increasing = locations.iter().all(|(_, offsets)| {
                let on_axis = offsets.iter().all(|o| match word.orientation {
                    Orientation::Horizontal => o.dy == 0,
                    Orientation::Vertical => o.dx == 0,
                });
                on_axis && offsets.windows(2).all(|pair| pair[0] < pair[1])
            });
            increasing
        }
    }

    #[test]
    fn single_letter() {
        for orientation in Orientation::ALL {
            let word = WordOrientation::new(crate::Word::new("Q").unwrap(), orientation);
            let locations = LetterLocations::of(&word);
            assert_eq!(locations.len(), 1);
            assert_eq!(locations.get('Q'), &[RelativeOffset::ORIGIN]);
        }
    }

    #[test]
    fn repeated_letters() {
        let locations = LetterLocations::of(&word!("LEVEL", Vertical));
        assert_eq!(
            locations.get('L'),
            &[RelativeOffset::new(0, 0), RelativeOffset::new(0, 4)]
        );
        assert_eq!(
            locations.get('E'),
            &[RelativeOffset::new(0, 1), RelativeOffset::new(0, 3)]
        );
        assert_eq!(locations.get('V'), &[RelativeOffset::new(0, 2)]);
        assert!(locations.get('X').is_empty());
    }
}
