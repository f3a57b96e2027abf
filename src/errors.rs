//! errors.rs — lightweight error type for chabrier-imf
//!
//! * No external crates (`thiserror`); the enum is small enough by hand.
//! * Use `Result<T>` alias for convenience.

use core::fmt;

/// Result alias used across crate.
pub type Result<T, E = ImfError> = core::result::Result<T, E>;

/// Everything that can go wrong before or during a sampling call.
#[derive(Debug, Clone, PartialEq)]
pub enum ImfError {
    /// Mass bounds are not a usable support: `min >= max`, a bound is not
    /// finite, or `min <= 0` (the log-normal branch needs `m > 0`).
    InvalidRange { min: f64, max: f64 },

    /// Requested sample size is negative.
    InvalidSize(i64),

    /// `max_attempts` on the builder was zero.
    InvalidAttempts,

    /// The max-attempts guard tripped before the sample was complete.
    SamplingExhausted { attempts: u64, accepted: usize },

    /// Config (de)serialization failed (serde feature).
    #[cfg(feature = "serde")]
    Serialize(String),
}

impl fmt::Display for ImfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImfError::InvalidRange { min, max } => {
                write!(f, "invalid mass range: [{}, {}]", min, max)
            }
            ImfError::InvalidSize(size) => write!(f, "invalid sample size: {}", size),
            ImfError::InvalidAttempts => write!(f, "max_attempts must be at least 1"),
            ImfError::SamplingExhausted { attempts, accepted } => write!(
                f,
                "sampling exhausted after {} attempts ({} accepted)",
                attempts, accepted
            ),
            #[cfg(feature = "serde")]
            ImfError::Serialize(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ImfError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = ImfError::InvalidRange { min: 5.0, max: 1.0 };
        assert_eq!(e.to_string(), "invalid mass range: [5, 1]");
        assert_eq!(ImfError::InvalidSize(-3).to_string(), "invalid sample size: -3");
        let e = ImfError::SamplingExhausted { attempts: 10, accepted: 2 };
        assert_eq!(e.to_string(), "sampling exhausted after 10 attempts (2 accepted)");
    }
}
