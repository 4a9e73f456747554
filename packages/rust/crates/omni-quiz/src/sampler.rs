//! Sampling without replacement from an ordered pool.
//!
//! The random source is always passed in, so seeded generators reproduce the
//! same draw sequence.

use std::collections::BTreeSet;

use rand::Rng;

use crate::error::{QuizError, Result};

/// Draw one element uniformly at random and remove it from `pool`.
///
/// The index is taken over the pool's ordered iteration, so a given seed and
/// pool always yield the same element.
///
/// # Errors
///
/// Returns [`QuizError::EmptyPool`] if `pool` is empty.
pub fn draw_one<T, R>(pool: &mut BTreeSet<T>, rng: &mut R) -> Result<T>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    if pool.is_empty() {
        return Err(QuizError::EmptyPool);
    }
    let index = rng.gen_range(0..pool.len());
    let picked = pool.iter().nth(index).cloned().ok_or(QuizError::EmptyPool)?;
    pool.remove(&picked);
    log::trace!("drew element {index} of {}", pool.len() + 1);
    Ok(picked)
}

/// Draw `count` distinct elements, in draw order.
///
/// # Errors
///
/// Returns [`QuizError::EmptyPool`] if the pool runs out first. Elements drawn
/// before the failure are already removed from `pool`.
pub fn draw_many<T, R>(pool: &mut BTreeSet<T>, count: usize, rng: &mut R) -> Result<Vec<T>>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    (0..count).map(|_| draw_one(pool, rng)).collect()
}
