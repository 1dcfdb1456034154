//! Choosing the next prompt to work on.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::model::Prompt;

/// Pick one prompt uniformly at random. `None` only for an empty slice.
pub fn pick<'a, R: Rng + ?Sized>(remaining: &'a [Prompt], rng: &mut R) -> Option<&'a Prompt> {
    remaining.choose(rng)
}
