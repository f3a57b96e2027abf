//! sampler.rs — rejection sampling against the Chabrier density.
//!
//! Proposals are uniform on `[mass_min, mass_max]`, thresholds uniform on
//! `[0, density(1))`. A proposal `m` is kept when its threshold falls below
//! `density(m)`, i.e. with probability `acceptance_probability(m)`. The
//! envelope is used as-is even though the log-normal body rises far above
//! it, so every proposal up to `certain_acceptance_limit()` is kept and only
//! the power-law tail beyond it is thinned.
//!
//! By default the loop retries forever. Build the sampler with
//! `max_attempts` to turn a hopeless range into `SamplingExhausted`.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use tracing::{debug, trace};

use crate::{
    density::{certain_acceptance_limit, density, envelope},
    errors::{ImfError, Result},
    params::SamplerConfig,
};

/// Validated mass support plus the cached envelope.
#[derive(Debug, Clone)]
pub struct ChabrierSampler {
    mass_min:     f64,
    mass_max:     f64,
    peak:         f64,
    max_attempts: Option<u64>,
    proposal:     Uniform<f64>,
    threshold:    Uniform<f64>,
}

/// Accepted masses together with the number of proposals it took.
#[derive(Debug, Clone, PartialEq)]
pub struct Draws {
    /// Accepted masses in acceptance order.
    pub masses: Vec<f64>,
    /// Proposals drawn, accepted or not.
    pub attempts: u64,
}

impl Draws {
    /// Fraction of proposals that were accepted; `None` if nothing was drawn.
    pub fn acceptance_rate(&self) -> Option<f64> {
        if self.attempts == 0 {
            None
        } else {
            Some(self.masses.len() as f64 / self.attempts as f64)
        }
    }
}

/// `Ok` when `[min, max]` is a usable support for the density.
///
/// The width must stay finite after the scaling `Uniform` applies to
/// inclusive float ranges, otherwise construction would panic.
pub(crate) fn check_range(min: f64, max: f64) -> Result<()> {
    let width_ok = ((max - min) / (1.0 - f64::EPSILON)).is_finite();
    if min.is_finite() && max.is_finite() && min > 0.0 && min < max && width_ok {
        Ok(())
    } else {
        Err(ImfError::InvalidRange { min, max })
    }
}

impl ChabrierSampler {
    /// Unguarded sampler over `[mass_min, mass_max]`.
    pub fn new(mass_min: f64, mass_max: f64) -> Result<Self> {
        Self::with_guard(mass_min, mass_max, None)
    }

    pub(crate) fn with_guard(
        mass_min: f64,
        mass_max: f64,
        max_attempts: Option<u64>,
    ) -> Result<Self> {
        check_range(mass_min, mass_max)?;
        if max_attempts == Some(0) {
            return Err(ImfError::InvalidAttempts);
        }

        let peak = envelope();
        if mass_min > certain_acceptance_limit() {
            debug!(
                mass_min,
                limit = certain_acceptance_limit(),
                "acceptance probability < 1 over the whole mass range"
            );
        }

        Ok(Self {
            mass_min,
            mass_max,
            peak,
            max_attempts,
            proposal: Uniform::new_inclusive(mass_min, mass_max),
            threshold: Uniform::new(0.0, peak),
        })
    }

    #[inline] pub fn mass_min(&self) -> f64 { self.mass_min }
    #[inline] pub fn mass_max(&self) -> f64 { self.mass_max }

    /// Envelope height used for thresholds, always `density(1)`.
    #[inline] pub fn peak(&self) -> f64 { self.peak }

    #[inline] pub fn max_attempts(&self) -> Option<u64> { self.max_attempts }

    /// Plain-data view of this sampler's settings.
    pub fn config(&self) -> SamplerConfig {
        SamplerConfig {
            mass_min: self.mass_min,
            mass_max: self.mass_max,
            max_attempts: self.max_attempts,
        }
    }

    /// Draw `size` accepted masses.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, size: usize) -> Result<Vec<f64>> {
        self.sample_draws(rng, size).map(|d| d.masses)
    }

    /// Draw `size` accepted masses and report how many proposals it took.
    ///
    /// Returns `SamplingExhausted` if the guard is set and runs out first;
    /// accepted masses are dropped in that case.
    pub fn sample_draws<R: Rng + ?Sized>(&self, rng: &mut R, size: usize) -> Result<Draws> {
        let mut masses = Vec::with_capacity(size);
        let mut attempts: u64 = 0;
        if size == 0 {
            return Ok(Draws { masses, attempts });
        }

        debug!(
            mass_min = self.mass_min,
            mass_max = self.mass_max,
            size,
            peak = self.peak,
            "rejection sampling started"
        );

        while masses.len() < size {
            if let Some(limit) = self.max_attempts {
                if attempts >= limit {
                    trace!(attempts, accepted = masses.len(), "max attempts reached");
                    return Err(ImfError::SamplingExhausted {
                        attempts,
                        accepted: masses.len(),
                    });
                }
            }
            attempts += 1;

            let m = self.proposal.sample(rng);
            let u = self.threshold.sample(rng);
            if u < density(m) {
                masses.push(m);
            }
        }

        debug!(
            size,
            attempts,
            acceptance = size as f64 / attempts as f64,
            "rejection sampling finished"
        );
        Ok(Draws { masses, attempts })
    }
}

/// One accepted mass per call. Ignores `max_attempts`.
impl Distribution<f64> for ChabrierSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        loop {
            let m = self.proposal.sample(rng);
            let u = self.threshold.sample(rng);
            if u < density(m) {
                return m;
            }
        }
    }
}
