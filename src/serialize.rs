//! (feature = "serde") JSON helpers for sampler settings.
//!
//! Only the plain `SamplerConfig` is encoded. The envelope and the uniform
//! proposal distributions are rebuilt on decode, so a decoded sampler goes
//! through the same range validation as one from the builder.

use crate::{
    errors::{ImfError, Result},
    params::{SamplerBuilder, SamplerConfig},
    sampler::ChabrierSampler,
};

/// Encode a sampler's settings as JSON bytes.
pub fn to_bytes(sampler: &ChabrierSampler) -> Result<Vec<u8>> {
    serde_json::to_vec(&sampler.config()).map_err(|e| ImfError::Serialize(e.to_string()))
}

/// Rebuild a sampler from JSON produced by `to_bytes` (or written by hand).
///
/// `max_attempts` may be omitted; it defaults to no limit.
pub fn from_slice(bytes: &[u8]) -> Result<ChabrierSampler> {
    let cfg: SamplerConfig =
        serde_json::from_slice(bytes).map_err(|e| ImfError::Serialize(e.to_string()))?;
    SamplerBuilder::from(cfg).build()
}
