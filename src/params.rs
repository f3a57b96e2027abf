//! params.rs — builder for configuring a `ChabrierSampler`.
//!
//! We keep it simple (no `derive_builder`); `build()` is where the range is
//! validated.

use crate::{errors::Result, sampler::ChabrierSampler};

/// Defaults from the reference population run (0.1 – 100 M☉).
const DEF_MASS_MIN: f64 = 0.1;
const DEF_MASS_MAX: f64 = 100.0;

/// Plain-data form of a sampler's settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplerConfig {
    pub mass_min: f64,
    pub mass_max: f64,
    /// `None` retries forever.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_attempts: Option<u64>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            mass_min: DEF_MASS_MIN,
            mass_max: DEF_MASS_MAX,
            max_attempts: None,
        }
    }
}

/// Builder pattern for `ChabrierSampler`.
#[derive(Debug, Clone, Default)]
pub struct SamplerBuilder {
    cfg: SamplerConfig,
}

impl SamplerBuilder {
    /// Create with defaults: `[0.1, 100]`, no attempt limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mass support `[min, max]` in solar masses.
    pub fn mass_range(mut self, min: f64, max: f64) -> Self {
        self.cfg.mass_min = min;
        self.cfg.mass_max = max;
        self
    }

    /// Give up with `SamplingExhausted` after `n` proposals per call.
    pub fn max_attempts(mut self, n: u64) -> Self {
        self.cfg.max_attempts = Some(n);
        self
    }

    /// Drop any attempt limit (the default).
    pub fn unbounded(mut self) -> Self {
        self.cfg.max_attempts = None;
        self
    }

    /// Finish and obtain a `ChabrierSampler`.
    ///
    /// Fails with `InvalidRange` for an unusable support and
    /// `InvalidAttempts` for `max_attempts(0)`.
    pub fn build(self) -> Result<ChabrierSampler> {
        ChabrierSampler::with_guard(self.cfg.mass_min, self.cfg.mass_max, self.cfg.max_attempts)
    }
}

impl From<SamplerConfig> for SamplerBuilder {
    fn from(cfg: SamplerConfig) -> Self {
        Self { cfg }
    }
}
