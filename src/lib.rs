//! chabrier-imf — stellar masses from a Chabrier-form IMF by rejection sampling.
//!
//! * Log-normal body for `m <= 1` M☉, power law `m^-2.3` above.
//! * Constant envelope `density(1)`; density is neither normalised nor
//!   continuous at the branch point.
//! * Optional max-attempts guard, parallel sampling with independent streams
//! * Optional JSON settings via `serde` feature
//!
//! ## Quick-start
//! ```rust
//! use chabrier_imf::{sample_seeded, SamplerBuilder};
//!
//! let masses = sample_seeded(0.1, 100.0, 100, 42).unwrap();
//! assert_eq!(masses.len(), 100);
//! assert!(masses.iter().all(|m| (0.1..=100.0).contains(m)));
//!
//! // far out on the tail almost nothing is accepted; give up after 100 tries
//! let guarded = SamplerBuilder::new()
//!     .mass_range(1e4, 1e5)
//!     .max_attempts(100)
//!     .build()
//!     .unwrap();
//! let mut rng = rand::thread_rng();
//! assert!(guarded.sample(&mut rng, 5).is_err());
//! ```

mod density;
mod errors;
mod parallel;
mod params;
mod sampler;
mod stats;

#[cfg(feature = "serde")]
mod serialize;

#[cfg(feature = "serde")]
pub use serialize::{from_slice, to_bytes};

pub use density::{
    acceptance_probability, branch_mismatch, certain_acceptance_limit, density, envelope,
    BRANCH_MASS, M_C, POWER_LAW_SLOPE, SIGMA,
};
pub use errors::{ImfError, Result};
pub use parallel::{sample_parallel, worker_streams};
pub use params::{SamplerBuilder, SamplerConfig};
pub use sampler::{ChabrierSampler, Draws};
pub use stats::MassSummary;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A mass in solar-mass units.
pub type Mass = f64;

/// Negative sizes are reported, everything else becomes a `usize`.
fn check_size(size: i64) -> Result<usize> {
    usize::try_from(size).map_err(|_| ImfError::InvalidSize(size))
}

/// Draw `size` masses from `[mass_min, mass_max]` using the thread-local RNG.
///
/// The range is checked before the size. Retries without limit; see
/// `SamplerBuilder::max_attempts` for a guarded variant.
pub fn sample(mass_min: Mass, mass_max: Mass, size: i64) -> Result<Vec<Mass>> {
    sample_with(&mut rand::thread_rng(), mass_min, mass_max, size)
}

/// Same as [`sample`] with a `StdRng` seeded from `seed`.
pub fn sample_seeded(mass_min: Mass, mass_max: Mass, size: i64, seed: u64) -> Result<Vec<Mass>> {
    sample_with(&mut StdRng::seed_from_u64(seed), mass_min, mass_max, size)
}

/// Same as [`sample`] with a caller-supplied generator.
pub fn sample_with<R: Rng + ?Sized>(
    rng: &mut R,
    mass_min: Mass,
    mass_max: Mass,
    size: i64,
) -> Result<Vec<Mass>> {
    let sampler = ChabrierSampler::new(mass_min, mass_max)?;
    let size = check_size(size)?;
    sampler.sample(rng, size)
}
