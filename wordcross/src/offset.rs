use serde::{Deserialize, Serialize};

use crate::Orientation;

/// The longest word that can be laid out on the grid.
///
/// Offsets are stored as `i8`, so the last letter of a word (index `len - 1`)
/// and the difference of two letter positions must both fit in `-127..=127`.
pub const MAX_WORD_LEN: usize = 127;

/// A position relative to some word's origin.
///
/// The coordinate system is
/// ```text
/// +-------> dx
/// |
/// |
/// v
/// dy
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RelativeOffset {
    pub dx: i8,
    pub dy: i8,
}

impl RelativeOffset {
    pub const ORIGIN: RelativeOffset = RelativeOffset { dx: 0, dy: 0 };

    pub fn new(dx: i8, dy: i8) -> Self {
        Self { dx, dy }
    }

    /// The offset of the `index`-th letter of a word laid out in `orientation`.
    ///
    /// Panics if `index` does not fit in an `i8`, which cannot happen for
    /// letters of a validated [`Word`](crate::Word).
    pub fn along(orientation: Orientation, index: usize) -> Self {
        let i = i8::try_from(index).expect("letter index exceeds the offset range");
        match orientation {
            Orientation::Horizontal => Self { dx: i, dy: 0 },
            Orientation::Vertical => Self { dx: 0, dy: i },
        }
    }

}

/// A cell of the grid, relative to an anchor word's origin.
///
/// A placed word's origin and the offset of one of its letters can each be
/// up to `MAX_WORD_LEN - 1` away, so their sum needs more room than an `i8`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridCell {
    pub x: i16,
    pub y: i16,
}

impl GridCell {
    pub fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The cell `by` away from this one.
    pub fn shifted(self, by: RelativeOffset) -> Self {
        Self {
            x: self.x + i16::from(by.dx),
            y: self.y + i16::from(by.dy),
        }
    }
}

impl From<RelativeOffset> for GridCell {
    fn from(offset: RelativeOffset) -> Self {
        Self {
            x: i16::from(offset.dx),
            y: i16::from(offset.dy),
        }
    }
}

impl std::ops::Sub for RelativeOffset {
    type Output = Self;

    // Both operands are letter positions in words of at most MAX_WORD_LEN
    // letters, so this only overflows if that invariant was broken.
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            dx: self.dx.checked_sub(rhs.dx).expect("dx overflow"),
            dy: self.dy.checked_sub(rhs.dy).expect("dy overflow"),
        }
    }
}

impl std::ops::Neg for RelativeOffset {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::ORIGIN - self
    }
}

impl std::fmt::Display for RelativeOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{}]", self.dx, self.dy)
    }
}
