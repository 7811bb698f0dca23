//! Error conditions for the kurtosis computation.
//!
//! Every variant carries enough context to diagnose the rejected input
//! without re-running the computation. Validation happens before any
//! arithmetic, so a returned error guarantees no partial work was done.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Error type for the sample excess kurtosis computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KurtosisError {
    /// The input slice is empty; a sample requires at least one value.
    EmptyInput,

    /// The input contains a NaN or infinite value.
    NonFiniteValue {
        /// Position of the offending element.
        index: usize,
        /// The offending value (NaN or ±∞).
        value: f64,
    },

    /// The bias-corrected estimator divides by (n−2)(n−3) and is
    /// undefined below four samples.
    TooFewSamples {
        /// Number of samples provided.
        got: usize,
        /// Minimum required samples.
        min: usize,
    },

    /// All values are identical; the second central moment is zero and
    /// the kurtosis ratio is undefined.
    ZeroVariance,
}

impl Display for KurtosisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input sample is empty"),
            Self::NonFiniteValue { index, value } => {
                write!(f, "Non-finite value {value} at index {index}")
            }
            Self::TooFewSamples { got, min } => {
                write!(f, "Too few samples: got {got}, need at least {min}")
            }
            Self::ZeroVariance => {
                write!(f, "Sample has zero variance (all values identical)")
            }
        }
    }
}

impl Error for KurtosisError {}
