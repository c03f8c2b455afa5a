//! Random source seam and uniform pool draws.

use std::collections::VecDeque;

use rand::{Rng, RngCore};

use crate::category::Category;
use crate::error::SelectionError;

/// Source of uniformly distributed indices.
pub trait RandomSource {
    /// Return an index in `[0, n)`. Callers never pass `n == 0`.
    fn draw(&mut self, n: usize) -> usize;
}

impl<R> RandomSource for R
where
    R: RngCore,
{
    fn draw(&mut self, n: usize) -> usize {
        self.gen_range(0..n)
    }
}

/// Replays a fixed sequence of indices, each reduced modulo the pool size.
/// Once the script runs out every draw returns 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: VecDeque<usize>,
    calls: usize,
}

impl ScriptedSource {
    #[must_use]
    pub fn new<I>(indices: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Self {
            script: indices.into_iter().collect(),
            calls: 0,
        }
    }

    /// Number of draws consumed so far.
    #[must_use]
    pub const fn calls(&self) -> usize {
        self.calls
    }
}

impl RandomSource for ScriptedSource {
    fn draw(&mut self, n: usize) -> usize {
        self.calls = self.calls.saturating_add(1);
        self.script.pop_front().unwrap_or(0) % n.max(1)
    }
}

/// Pick one element of `pool` uniformly.
///
/// # Errors
///
/// Returns [`SelectionError::EmptyPool`] when `pool` has no elements.
pub fn draw_uniform<'a, R>(
    source: &mut R,
    pool: &'a [String],
    category: Category,
    pool_name: &'static str,
) -> Result<&'a str, SelectionError>
where
    R: RandomSource + ?Sized,
{
    if pool.is_empty() {
        return Err(SelectionError::EmptyPool {
            category,
            pool: pool_name,
        });
    }
    let index = source.draw(pool.len());
    log::trace!("{category}.{pool_name}: drew {index} of {}", pool.len());
    pool.get(index)
        .map(String::as_str)
        .ok_or(SelectionError::EmptyPool {
            category,
            pool: pool_name,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rand::rngs::mock::StepRng;
    use std::collections::HashSet;

    fn pool(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn scripted_source_replays_and_wraps() {
        let mut source = ScriptedSource::new([1, 5, 2]);
        assert_eq!(source.draw(3), 1);
        assert_eq!(source.draw(3), 2);
        assert_eq!(source.draw(4), 2);
        assert_eq!(source.draw(4), 0);
        assert_eq!(source.calls(), 4);
    }

    #[test]
    fn empty_pool_is_an_error() {
        let mut source = ScriptedSource::default();
        let err = draw_uniform(&mut source, &[], Category::CharacterClass, "classes").unwrap_err();
        assert_eq!(
            err,
            SelectionError::EmptyPool {
                category: Category::CharacterClass,
                pool: "classes"
            }
        );
        assert_eq!(source.calls(), 0, "empty pools must not consume draws");
    }

    #[test]
    fn draws_stay_inside_pool_and_cover_it() {
        let values = pool(&["Маленький", "Средний", "Большой", "Огромный"]);
        let mut rng = SmallRng::seed_from_u64(0x7E44_A41A);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            let picked =
                draw_uniform(&mut rng, &values, Category::WorldSettings, "sizes").unwrap();
            assert!(values.iter().any(|v| v == picked));
            seen.insert(picked.to_string());
        }
        assert_eq!(seen.len(), values.len());
    }

    #[test]
    fn rng_core_sources_work_through_blanket_impl() {
        let values = pool(&["a", "b"]);
        let mut rng = StepRng::new(0, 0);
        let picked = draw_uniform(&mut rng, &values, Category::WorldSettings, "sizes").unwrap();
        assert!(picked == "a" || picked == "b");
    }
}
