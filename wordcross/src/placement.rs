use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{GridCell, IndexTable, RelativeOffset, WordOrientation};

/// How much is known about a [`Placement`] beyond the shared letter lining up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verification {
    /// The two words run in different directions, so they only meet at the
    /// shared letter.
    Crossing,
    /// The two words run in the same direction and overlap along it. Nothing
    /// checks that the overlapping letters agree, or that the combined run of
    /// letters is still a word. See [`Placement::conflicts_with()`].
    Unverified,
}

/// One way of laying `target` against an anchor word so that a letter they
/// share lands on the same cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub target: WordOrientation,
    /// Where the target's origin goes, relative to the anchor's origin.
    pub origin: RelativeOffset,
    pub verification: Verification,
}

impl Placement {
    /// The target's letters, relative to the anchor's origin.
    pub fn cells(&self) -> impl Iterator<Item = (GridCell, char)> + '_ {
        let origin = GridCell::from(self.origin);
        self.target
            .cells()
            .map(move |(offset, letter)| (origin.shifted(offset), letter))
    }

    /// Whether laying the target here would put a different letter on a cell
    /// that `anchor` already occupies.
    ///
    /// This can only be true for [`Verification::Unverified`] placements.
    pub fn conflicts_with(&self, anchor: &WordOrientation) -> bool {
        let anchor_cells: HashMap<GridCell, char> = anchor
            .cells()
            .map(|(offset, letter)| (GridCell::from(offset), letter))
            .collect();
        self.cells().any(|(cell, letter)| {
            anchor_cells
                .get(&cell)
                .is_some_and(|&existing| existing != letter)
        })
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{},{}}}", self.target, self.origin)
    }
}

impl IndexTable {
    /// Every way of crossing `anchor` with a word in this table, including
    /// `anchor` itself and the other orientation of the same word.
    ///
    /// There is one placement per shared letter, position of that letter in
    /// the candidate and position of that letter in the anchor. Placements
    /// are not deduplicated. They are ordered by candidate (in table order),
    /// then by letter, then by the letter's position in the candidate, then
    /// by its position in the anchor.
    ///
    /// Candidates in the same orientation as the anchor are not checked for
    /// overlapping letters and are returned as [`Verification::Unverified`].
    ///
    /// Panics if `anchor` is not in the table.
    pub fn placements_for(&self, anchor: &WordOrientation) -> Vec<Placement> {
        let anchor_locations = self
            .get(anchor)
            .unwrap_or_else(|| panic!("{} is not in the index table", anchor));

        let mut placements = Vec::new();
        for (candidate, candidate_locations) in self.iter() {
            let verification = if candidate.orientation == anchor.orientation {
                Verification::Unverified
            } else {
                Verification::Crossing
            };
            for (letter, in_anchor) in anchor_locations.iter() {
                for &p_candidate in candidate_locations.get(letter) {
                    for &p_anchor in in_anchor {
                        placements.push(Placement {
                            target: candidate.clone(),
                            origin: p_anchor - p_candidate,
                            verification,
                        });
                    }
                }
            }
        }
        placements
    }
}
