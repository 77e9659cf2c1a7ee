use std::collections::BTreeSet;

use quickcheck::{Arbitrary, Gen};

use crate::{Orientation, Word, WordOrientation};

// A small alphabet, so that random words actually share letters.
const LETTERS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'É'];

fn arbitrary_text(g: &mut Gen) -> String {
    let len = 1 + usize::arbitrary(g) % 8;
    (0..len).map(|_| *g.choose(&LETTERS).unwrap()).collect()
}

#[derive(Clone, Debug)]
pub struct ArbitraryWord(pub WordOrientation);

impl Arbitrary for ArbitraryWord {
    fn arbitrary(g: &mut Gen) -> Self {
        let word = Word::new(arbitrary_text(g)).unwrap();
        ArbitraryWord(WordOrientation::new(word, Orientation::arbitrary(g)))
    }
}

/// A nonempty list of distinct words.
#[derive(Clone, Debug)]
pub struct ArbitraryWordList(pub Vec<Word>);

impl Arbitrary for ArbitraryWordList {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_words = 1 + usize::arbitrary(g) % 5;
        let mut texts = BTreeSet::new();
        while texts.len() < num_words {
            texts.insert(arbitrary_text(g));
        }
        ArbitraryWordList(
            texts
                .into_iter()
                .map(|text| Word::new(text).unwrap())
                .collect(),
        )
    }
}

impl Arbitrary for Orientation {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Orientation::ALL).unwrap()
    }
}
