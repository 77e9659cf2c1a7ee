use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{IndexTable, Placement, Word, WordOrientation};

/// The placements of every word in both orientations against every other.
///
/// Building it compares every pair of entries letter position by letter
/// position, so it grows with the square of the number of words and the
/// square of the word length. That is fine for a few dozen words, not for a
/// whole dictionary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PlacementMapEntry>", into = "Vec<PlacementMapEntry>")]
pub struct PlacementMap(BTreeMap<WordOrientation, Vec<Placement>>);

/// The serialized form of one anchor's placements.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlacementMapEntry {
    pub anchor: WordOrientation,
    pub placements: Vec<Placement>,
}

impl PlacementMap {
    pub fn build(table: &IndexTable) -> Self {
        let map: BTreeMap<WordOrientation, Vec<Placement>> = table
            .keys()
            .map(|anchor| (anchor.clone(), table.placements_for(anchor)))
            .collect();
        let result = Self(map);
        debug!(
            num_anchors = result.len(),
            num_placements = result.total_placements(),
            "Built placement map"
        );
        result
    }

    /// Indexes `words` and builds the map from that.
    ///
    /// Panics if the same word occurs twice in `words`.
    pub fn from_words(words: &[Word]) -> Self {
        Self::build(&IndexTable::new(words))
    }

    pub fn get(&self, anchor: &WordOrientation) -> Option<&[Placement]> {
        self.0.get(anchor).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&WordOrientation, &[Placement])> {
        self.0
            .iter()
            .map(|(anchor, placements)| (anchor, placements.as_slice()))
    }

    /// The number of anchors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total_placements(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// A copy with every placement dropped that puts a different letter on a
    /// cell of its anchor.
    pub fn without_conflicts(&self) -> Self {
        let filtered = Self(
            self.0
                .iter()
                .map(|(anchor, placements)| {
                    let kept = placements
                        .iter()
                        .filter(|p| !p.conflicts_with(anchor))
                        .cloned()
                        .collect();
                    (anchor.clone(), kept)
                })
                .collect(),
        );
        debug!(
            num_dropped = self.total_placements() - filtered.total_placements(),
            "Dropped conflicting placements"
        );
        filtered
    }
}

/// One line per anchor: the anchor, a colon, then every placement followed by a comma.
impl std::fmt::Display for PlacementMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (anchor, placements) in &self.0 {
            write!(f, "{}:", anchor)?;
            for placement in placements {
                write!(f, "{},", placement)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The error when deserializing a [`PlacementMap`] that lists an anchor twice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateAnchor(pub WordOrientation);

impl std::error::Error for DuplicateAnchor {}

impl std::fmt::Display for DuplicateAnchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The anchor {} is listed twice", self.0)
    }
}

impl TryFrom<Vec<PlacementMapEntry>> for PlacementMap {
    type Error = DuplicateAnchor;

    fn try_from(entries: Vec<PlacementMapEntry>) -> Result<Self, Self::Error> {
        let mut map = BTreeMap::new();
        for PlacementMapEntry { anchor, placements } in entries {
            if map.contains_key(&anchor) {
                return Err(DuplicateAnchor(anchor));
            }
            map.insert(anchor, placements);
        }
        Ok(Self(map))
    }
}

impl From<PlacementMap> for Vec<PlacementMapEntry> {
    fn from(map: PlacementMap) -> Self {
        map.0
            .into_iter()
            .map(|(anchor, placements)| PlacementMapEntry { anchor, placements })
            .collect()
    }
}
