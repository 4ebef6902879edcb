//! Seedable randomness and the distribution sampler used by the
//! distribution-driven selection and crossover variants.
use crate::errors::Error;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Beta, Binomial, ChiSquared, Distribution, Exp, Normal, Poisson};
use serde::{Deserialize, Serialize};

/// Weyl-sequence increment, used to derive independent per-generation seeds
/// from the engine seed.
pub const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Smallest accepted beta shape parameter.
pub const MIN_BETA_SHAPE: f64 = 1e-37;

/// Derive the RNG driving one generation. Seeding per generation instead of
/// streaming one RNG across generations keeps saved engines resumable: the
/// RNG state never needs to be persisted.
pub fn generation_rng(seed: u64, generation: usize) -> SmallRng {
    SmallRng::seed_from_u64(seed ^ (generation as u64).wrapping_mul(GOLDEN_GAMMA))
}

/// A distribution over an index range, with all parameters optional.
/// Omitted parameters resolve from the sampled range size `n` at call time:
///
/// * normal: mean `n/2`, standard deviation `n/6`
/// * beta: alpha 1, beta 1
/// * binomial: trials `n-1`, probability 0.5
/// * chi-square: degrees of freedom `n`
/// * exponential: mean `n/2`
/// * poisson: mean `n/2`
///
/// Continuous draws are scaled and clamped into the target range, integer
/// draws (binomial, poisson) are used directly and clamped.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Sampler {
    Uniform,
    Normal {
        mean: Option<f64>,
        stddev: Option<f64>,
    },
    Beta {
        alpha: Option<f64>,
        beta: Option<f64>,
    },
    Binomial {
        trials: Option<u64>,
        probability: Option<f64>,
    },
    ChiSquare {
        freedom: Option<f64>,
    },
    Exponential {
        mean: Option<f64>,
    },
    Poisson {
        mean: Option<f64>,
    },
}

impl Sampler {
    /// Reject impossible explicit parameters. Called when building the engine
    /// configuration, so sampling itself never fails.
    pub fn validate(&self) -> Result<(), Error> {
        match *self {
            Sampler::Uniform => Ok(()),
            Sampler::Normal { mean, stddev } => {
                if mean.is_some_and(|v| !v.is_finite()) {
                    Err(Error::InvalidConfig("normal sampler requires a finite mean"))
                } else if stddev.is_some_and(|v| !v.is_finite() || v <= 0.0) {
                    Err(Error::InvalidConfig(
                        "normal sampler requires a positive finite stddev",
                    ))
                } else {
                    Ok(())
                }
            }
            Sampler::Beta { alpha, beta } => {
                if alpha.is_some_and(|v| !v.is_finite() || v < MIN_BETA_SHAPE)
                    || beta.is_some_and(|v| !v.is_finite() || v < MIN_BETA_SHAPE)
                {
                    Err(Error::InvalidConfig(
                        "beta sampler requires shape parameters >= 1e-37",
                    ))
                } else {
                    Ok(())
                }
            }
            Sampler::Binomial { probability, .. } => {
                if probability.is_some_and(|v| !(0.0..=1.0).contains(&v)) {
                    Err(Error::InvalidConfig(
                        "binomial sampler requires a probability within [0, 1]",
                    ))
                } else {
                    Ok(())
                }
            }
            Sampler::ChiSquare { freedom } => {
                if freedom.is_some_and(|v| !v.is_finite() || v <= 0.0) {
                    Err(Error::InvalidConfig(
                        "chi-square sampler requires positive degrees of freedom",
                    ))
                } else {
                    Ok(())
                }
            }
            Sampler::Exponential { mean } => {
                if mean.is_some_and(|v| !v.is_finite() || v <= 0.0) {
                    Err(Error::InvalidConfig(
                        "exponential sampler requires a positive mean",
                    ))
                } else {
                    Ok(())
                }
            }
            Sampler::Poisson { mean } => {
                if mean.is_some_and(|v| !v.is_finite() || v <= 0.0) {
                    Err(Error::InvalidConfig("poisson sampler requires a positive mean"))
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Draw a value in `[0, 1)`, resolving omitted parameters from the
    /// context size `n`. Used to map draws onto a cumulative fitness range.
    pub fn sample_unit<R: Rng>(&self, rng: &mut R, n: usize) -> f64 {
        let n = n.max(1) as f64;
        let raw = match *self {
            Sampler::Uniform => rng.gen::<f64>(),
            Sampler::Normal { mean, stddev } => {
                let mean = mean.unwrap_or(n / 2.0);
                let stddev = stddev.unwrap_or(n / 6.0).max(f64::MIN_POSITIVE);
                Normal::new(mean, stddev).unwrap().sample(rng) / n
            }
            Sampler::Beta { alpha, beta } => Beta::new(alpha.unwrap_or(1.0), beta.unwrap_or(1.0))
                .unwrap()
                .sample(rng),
            Sampler::Binomial {
                trials,
                probability,
            } => {
                let trials = trials.unwrap_or((n as u64).saturating_sub(1));
                let sample = Binomial::new(trials, probability.unwrap_or(0.5))
                    .unwrap()
                    .sample(rng);
                sample as f64 / n
            }
            Sampler::ChiSquare { freedom } => {
                let freedom = freedom.unwrap_or(n);
                ChiSquared::new(freedom).unwrap().sample(rng) / (2.0 * freedom)
            }
            Sampler::Exponential { mean } => {
                let mean = mean.unwrap_or(n / 2.0);
                Exp::new(1.0 / mean).unwrap().sample(rng) / (2.0 * mean)
            }
            Sampler::Poisson { mean } => {
                let mean = mean.unwrap_or(n / 2.0);
                Poisson::new(mean).unwrap().sample(rng) / n
            }
        };
        clamp_unit(raw)
    }

    /// Draw an index in `[0, upper)`.
    pub fn sample_index<R: Rng>(&self, rng: &mut R, upper: usize) -> usize {
        debug_assert!(upper > 0);
        match *self {
            Sampler::Uniform => rng.gen_range(0..upper),
            Sampler::Binomial {
                trials,
                probability,
            } => {
                let trials = trials.unwrap_or((upper as u64).saturating_sub(1));
                let sample = Binomial::new(trials, probability.unwrap_or(0.5))
                    .unwrap()
                    .sample(rng);
                (sample as usize).min(upper - 1)
            }
            Sampler::Poisson { mean } => {
                let mean = mean.unwrap_or(upper as f64 / 2.0);
                let sample = Poisson::new(mean).unwrap().sample(rng);
                (sample as usize).min(upper - 1)
            }
            _ => {
                let unit = self.sample_unit(rng, upper);
                ((unit * upper as f64) as usize).min(upper - 1)
            }
        }
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0 - f64::EPSILON)
    } else {
        0.0
    }
}
