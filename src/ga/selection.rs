//! Fitness-proportionate parent selection by rejection sampling.
//!
//! A candidate is drawn uniformly and accepted if its fitness beats a
//! uniform threshold in `[0, best_fitness)`. Acceptance probability is
//! therefore `fitness / best_fitness`, calibrated against the best fitness
//! of the whole run rather than the current generation.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel)
//! - Lipowski & Lipowska (2012), "Roulette-wheel selection via stochastic
//!   acceptance"

use super::types::Individual;
use rand::Rng;

/// Default number of samples before the selector accepts the last draw.
pub const DEFAULT_MAX_SELECTION_ATTEMPTS: usize = 10_000;

/// Rejection sampler choosing parents from a population.
///
/// # Examples
///
/// ```
/// use phrase_ga::ga::{Genome, Selector};
/// use rand::SeedableRng;
///
/// let population = vec![Genome::new(b"ab".to_vec()), Genome::new(b"cd".to_vec())];
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
///
/// // Nothing scored yet: the selector degrades to a uniform pick.
/// let idx = Selector::default().select(&population, 0.0, &mut rng);
/// assert!(idx < population.len());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selector {
    max_attempts: usize,
}

impl Default for Selector {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SELECTION_ATTEMPTS)
    }
}

impl Selector {
    /// Creates a selector that gives up after `max_attempts` samples.
    ///
    /// A cap of 0 is treated as 1.
    pub fn new(max_attempts: usize) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Select a parent index from the population.
    ///
    /// With `best_fitness <= 0.0` there is no usable threshold range and a
    /// uniform index is returned at once. Otherwise candidates are sampled
    /// until one has fitness strictly above its threshold; after
    /// `max_attempts` rejections the last candidate is returned anyway.
    ///
    /// # Complexity
    /// O(1) expected per sample, at most `max_attempts` samples.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<I: Individual, R: Rng>(
        &self,
        population: &[I],
        best_fitness: f64,
        rng: &mut R,
    ) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        let n = population.len();
        if best_fitness <= 0.0 {
            return rng.random_range(0..n);
        }

        let mut idx = 0;
        for _ in 0..self.max_attempts {
            idx = rng.random_range(0..n);
            let threshold = rng.random::<f64>() * best_fitness;
            if population[idx].fitness() > threshold {
                return idx;
            }
        }

        log::trace!(
            "selection fell back after {} rejected samples",
            self.max_attempts
        );
        idx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    #[derive(Clone)]
    struct TestInd {
        fit: f64,
    }

    impl Individual for TestInd {
        fn fitness(&self) -> f64 {
            self.fit
        }
    }

    fn make_population(fitnesses: &[f64]) -> Vec<TestInd> {
        fitnesses.iter().map(|&f| TestInd { fit: f }).collect()
    }

    /// Counts how many times the selector pulls from the generator.
    struct CountingRng {
        inner: StdRng,
        calls: usize,
    }

    impl RngCore for CountingRng {
        fn next_u32(&mut self) -> u32 {
            self.calls += 1;
            self.inner.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.calls += 1;
            self.inner.next_u64()
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            self.calls += 1;
            self.inner.fill_bytes(dst)
        }
    }

    #[test]
    fn test_favors_fitter() {
        let pop = make_population(&[0.1, 0.9, 0.3, 0.5]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        let n = 20_000;
        for _ in 0..n {
            counts[Selector::default().select(&pop, 0.9, &mut rng)] += 1;
        }
        // Acceptance is proportional to fitness: expected share 0.9 / 1.8.
        let share = f64::from(counts[1]) / f64::from(n);
        assert!(
            (share - 0.5).abs() < 0.03,
            "expected fittest share near 0.5, got {share} ({counts:?})"
        );
        assert!(counts[1] > counts[3] && counts[3] > counts[2] && counts[2] > counts[0]);
    }

    #[test]
    fn test_zero_fitness_individual_never_chosen() {
        let pop = make_population(&[0.0, 0.4, 0.0]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            assert_eq!(Selector::default().select(&pop, 0.4, &mut rng), 1);
        }
    }

    #[test]
    fn test_zero_best_fitness_short_circuits() {
        let pop = make_population(&[0.0, 0.0, 0.0, 0.0]);
        let mut rng = CountingRng {
            inner: StdRng::seed_from_u64(42),
            calls: 0,
        };

        let idx = Selector::default().select(&pop, 0.0, &mut rng);

        assert!(idx < pop.len());
        assert!(
            rng.calls <= 2,
            "expected an immediate uniform pick, saw {} rng calls",
            rng.calls
        );
    }

    #[test]
    fn test_zero_best_fitness_is_uniform() {
        let pop = make_population(&[0.0; 4]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        for _ in 0..10_000 {
            counts[Selector::default().select(&pop, 0.0, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 2000, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_fallback_after_max_attempts() {
        // Every threshold exceeds 0.0, so nothing is ever accepted.
        let pop = make_population(&[0.0, 0.0]);
        let mut rng = CountingRng {
            inner: StdRng::seed_from_u64(42),
            calls: 0,
        };

        let idx = Selector::new(25).select(&pop, 1.0, &mut rng);

        assert!(idx < pop.len());
        assert!(rng.calls >= 25, "expected 25 samples, saw {} rng calls", rng.calls);
    }

    #[test]
    fn test_zero_attempts_treated_as_one() {
        assert_eq!(Selector::new(0).max_attempts(), 1);
        assert_eq!(
            Selector::default().max_attempts(),
            DEFAULT_MAX_SELECTION_ATTEMPTS
        );
    }

    #[test]
    fn test_single_individual() {
        let pop = make_population(&[0.3]);
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(Selector::default().select(&pop, 0.3, &mut rng), 0);
        assert_eq!(Selector::default().select(&pop, 0.0, &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<TestInd> = vec![];
        let mut rng = StdRng::seed_from_u64(42);
        Selector::default().select(&pop, 1.0, &mut rng);
    }
}
