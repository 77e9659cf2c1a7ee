use rand::seq::SliceRandom;
use rand::Rng;

use crate::NotEnoughWords;

/// Picks `n` entries of `words` at distinct positions, in random order.
///
/// If `words` itself contains no duplicates, neither does the result.
pub fn sample_words<R: Rng + ?Sized>(
    words: &[String],
    n: usize,
    rng: &mut R,
) -> Result<Vec<String>, NotEnoughWords> {
    if n > words.len() {
        return Err(NotEnoughWords {
            requested: n,
            available: words.len(),
        });
    }
    Ok(words.choose_multiple(rng, n).cloned().collect())
}
