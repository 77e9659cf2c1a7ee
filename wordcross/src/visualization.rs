use std::collections::BTreeMap;

use crate::{GridCell, Placement, WordOrientation};

/// Draws `anchor` at the origin and the placed word on top of it.
///
/// A cell where the two words put different letters is drawn as `?`.
pub fn visualize_placement(anchor: &WordOrientation, placement: &Placement) -> String {
    // Keyed by (y, x) to iterate in row-major order
    let mut cells: BTreeMap<(i16, i16), char> = BTreeMap::new();
    for (offset, letter) in anchor.cells() {
        let cell = GridCell::from(offset);
        cells.insert((cell.y, cell.x), letter);
    }
    for (cell, letter) in placement.cells() {
        cells
            .entry((cell.y, cell.x))
            .and_modify(|existing| {
                if *existing != letter {
                    *existing = '?';
                }
            })
            .or_insert(letter);
    }

    // A word has at least one letter, so there's at least one cell
    let (Some(&(y_min, _)), Some(&(y_max, _))) = (cells.keys().next(), cells.keys().next_back())
    else {
        return String::new();
    };
    let (mut x_min, mut x_max) = (i16::MAX, i16::MIN);
    for &(_, x) in cells.keys() {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
    }

    // Draw the top of the box
    let mut result = format!("    {:>2}", x_min);
    result += "\n    ╭";
    for _ in x_min..=x_max {
        result += "──";
    }
    result += "╮\n";

    for y in y_min..=y_max {
        result += &format!("{:>3} │", y);
        for x in x_min..=x_max {
            result.push(cells.get(&(y, x)).copied().unwrap_or(' '));
            result.push(' ');
        }
        result += "│\n";
    }

    // Draw the bottom of the box
    result += "    ╰";
    for _ in x_min..=x_max {
        result += "──";
    }
    result += "╯";
    result
}
