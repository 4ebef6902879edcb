//! The crate-wide error type.
use thiserror::Error;

/// All fallible engine operations return this error. Configuration problems
/// are rejected when building, so the evolution loop itself only surfaces
/// fitness and persistence failures.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or inconsistent options, raised when building an engine or a
    /// genotype (e.g. `preserve` larger than the population size).
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// An injected or encoded chromosome violates the genotype's invariants.
    /// The population is left unchanged.
    #[error("invalid chromosome: {0}")]
    InvalidChromosome(String),

    /// The user fitness callback failed. The current generation is aborted,
    /// already written fitness scores are retained.
    #[error("fitness calculation failed: {0}")]
    Fitness(String),

    /// Strict mode detected that the fitness callback modified the genes.
    #[error("chromosome mutated during fitness calculation")]
    MutatedDuringFitness,

    /// `evolve`, `inject` or `get_fittest` called before `init`.
    #[error("population not initialized, call init() first")]
    NotInitialized,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}
