//! One generation of genomes and the run-level best record.

use super::genome::Genome;
use super::target::Target;
use super::types::Individual;
use rand::Rng;

/// Best fitness and phrase seen across a whole run.
///
/// Owned by the engine and threaded through [`Population::evaluate`]; it is
/// never reset between generations, so its fitness only grows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunBest {
    fitness: f64,
    phrase: String,
}

impl RunBest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Records `genome` if its fitness is at least the current best.
    ///
    /// Ties replace the stored phrase, so the reported best can change
    /// without the fitness improving. Returns whether the record changed.
    pub fn observe(&mut self, genome: &Genome) -> bool {
        if genome.fitness() >= self.fitness {
            self.fitness = genome.fitness();
            self.phrase = genome.phrase();
            true
        } else {
            false
        }
    }

    /// True iff the best phrase equals the target character for character.
    ///
    /// Defined on the string rather than on `fitness == 1.0`.
    pub fn is_converged(&self, target: &Target) -> bool {
        self.phrase == target.as_str()
    }
}

/// The genomes alive in one generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    genomes: Vec<Genome>,
}

impl Population {
    /// Creates `size` random genomes of `length` characters each.
    ///
    /// Duplicates are not filtered.
    pub fn seed<R: Rng>(size: usize, length: usize, rng: &mut R) -> Self {
        Self {
            genomes: (0..size).map(|_| Genome::random(length, rng)).collect(),
        }
    }

    pub fn from_genomes(genomes: Vec<Genome>) -> Self {
        Self { genomes }
    }

    /// Scores every genome against `target`, then folds the generation into
    /// `best` in population order.
    pub fn evaluate(&mut self, target: &Target, best: &mut RunBest) {
        for genome in &mut self.genomes {
            genome.score(target);
        }
        for genome in &self.genomes {
            best.observe(genome);
        }
    }

    pub fn genomes(&self) -> &[Genome] {
        &self.genomes
    }

    pub fn len(&self) -> usize {
        self.genomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genomes.is_empty()
    }

    /// Mean fitness of this generation (0.0 when empty).
    pub fn mean_fitness(&self) -> f64 {
        if self.genomes.is_empty() {
            return 0.0;
        }
        let total: f64 = self.genomes.iter().map(Individual::fitness).sum();
        total / self.genomes.len() as f64
    }

    /// Fittest genome of this generation; the last one wins ties.
    pub fn fittest(&self) -> Option<&Genome> {
        self.genomes.iter().reduce(|best, g| {
            if g.fitness() >= best.fitness() {
                g
            } else {
                best
            }
        })
    }
}
