//! Computes every way two words can be laid across each other on a grid by
//! sharing a letter.
//!
//! ```
//! # use wordcross::{word, IndexTable, RelativeOffset};
//! let table = IndexTable::from_strs(&["CAT", "ACE"])?;
//! let placements = table.placements_for(&word!("CAT", Horizontal));
//! // ACE laid down, through the 'A' of CAT
//! assert!(placements
//!     .iter()
//!     .any(|p| p.target == word!("ACE", Vertical) && p.origin == RelativeOffset::new(1, 0)));
//! # Ok::<(), wordcross::InvalidWord>(())
//! ```
pub use errors::*;
pub use index::*;
pub use letters::*;
pub use offset::*;
pub use placement::*;
pub use placement_map::*;
pub use sample::*;
pub use visualization::*;
pub use words::*;

#[cfg(test)]
mod arbitrary;
mod errors;
mod index;
mod letters;
mod offset;
mod placement;
mod placement_map;
mod sample;
mod visualization;
mod words;
