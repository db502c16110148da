//! Character-string genome and its genetic operators.
//!
//! A [`Genome`] is a fixed-length sequence of printable ASCII bytes. Its
//! length is set at creation and is preserved by every operator:
//!
//! - [`Genome::score`]: cubic match ratio against a [`Target`]
//! - [`Genome::crossover`]: single-point recombination, one child
//! - [`Genome::mutate`]: independent per-character resampling
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Shiffman (2012), *The Nature of Code*, ch. 9 "The Evolution of Code"

use super::target::Target;
use super::types::Individual;
use rand::Rng;

/// Lowest character a gene can take (space).
pub const ALPHABET_MIN: u8 = b' ';

/// Highest character a gene can take (tilde).
pub const ALPHABET_MAX: u8 = b'~';

/// A candidate phrase plus its fitness against the target.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genome {
    genes: Vec<u8>,
    fitness: f64,
}

impl Genome {
    /// Wraps the given characters. Fitness starts at 0.0.
    pub fn new(genes: Vec<u8>) -> Self {
        Self {
            genes,
            fitness: 0.0,
        }
    }

    /// Creates a genome of `length` uniformly random printable characters.
    pub fn random<R: Rng>(length: usize, rng: &mut R) -> Self {
        Self::new((0..length).map(|_| random_gene(rng)).collect())
    }

    /// Fitness from the last [`score`](Self::score); 0.0 before scoring.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn genes(&self) -> &[u8] {
        &self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// The genes rendered as a string.
    pub fn phrase(&self) -> String {
        self.genes.iter().map(|&b| char::from(b)).collect()
    }

    /// Number of positions whose character equals the target's.
    pub fn matches(&self, target: &Target) -> usize {
        self.genes
            .iter()
            .zip(target.as_bytes())
            .filter(|(a, b)| a == b)
            .count()
    }

    /// Scores this genome against `target` and stores the result.
    ///
    /// `fitness = (matches / L)^3`. The cube widens the gap between
    /// near-matches and average candidates, which keeps selection pressure
    /// high late in a run.
    pub fn score(&mut self, target: &Target) {
        debug_assert_eq!(self.len(), target.len(), "genome/target length mismatch");
        let ratio = self.matches(target) as f64 / target.len() as f64;
        self.fitness = ratio.powi(3);
    }

    /// Single-point crossover at a uniformly random cut in `[0, L)`.
    ///
    /// Returns a new genome `self[..cut] ++ other[cut..]`; neither parent is
    /// modified. A cut of 0 reproduces `other`.
    ///
    /// # Panics
    /// Panics if the parents have different lengths.
    pub fn crossover<R: Rng>(&self, other: &Genome, rng: &mut R) -> Genome {
        if self.is_empty() {
            return self.crossover_at(other, 0);
        }
        let cut = rng.random_range(0..self.len());
        self.crossover_at(other, cut)
    }

    /// Crossover with an explicit cut point: `self[..cut] ++ other[cut..]`.
    ///
    /// # Complexity
    /// O(L)
    ///
    /// # Panics
    /// Panics if the parents have different lengths or `cut > L`.
    pub fn crossover_at(&self, other: &Genome, cut: usize) -> Genome {
        let n = self.len();
        assert_eq!(n, other.len(), "parents must have equal length");
        assert!(cut <= n, "cut point {cut} out of range for length {n}");

        let mut genes = Vec::with_capacity(n);
        genes.extend_from_slice(&self.genes[..cut]);
        genes.extend_from_slice(&other.genes[cut..]);
        Genome::new(genes)
    }

    /// Resamples each character independently with probability
    /// `mutation_rate`. A resampled character may land on its old value.
    pub fn mutate<R: Rng>(&mut self, rng: &mut R, mutation_rate: f64) {
        for gene in &mut self.genes {
            if rng.random::<f64>() < mutation_rate {
                *gene = random_gene(rng);
            }
        }
    }
}

impl Individual for Genome {
    fn fitness(&self) -> f64 {
        Genome::fitness(self)
    }
}

fn random_gene<R: Rng>(rng: &mut R) -> u8 {
    rng.random_range(ALPHABET_MIN..=ALPHABET_MAX)
}
