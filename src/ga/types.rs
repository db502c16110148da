//! Core trait shared by the engine and the selector.

/// A candidate solution that carries a fitness score.
///
/// Fitness is **maximized**: higher is better, and scores are expected to
/// be non-negative. The selector only needs this view of a candidate,
/// which keeps it independent of the genome representation.
///
/// # Implementing
///
/// ```
/// use phrase_ga::ga::Individual;
///
/// #[derive(Clone)]
/// struct Scored {
///     fitness: f64,
/// }
///
/// impl Individual for Scored {
///     fn fitness(&self) -> f64 {
///         self.fitness
///     }
/// }
/// ```
pub trait Individual: Clone {
    /// Returns the current fitness of this individual.
    fn fitness(&self) -> f64;
}
