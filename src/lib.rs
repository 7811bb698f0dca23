//! # kurtosis
//!
//! Bias-corrected sample excess kurtosis (G₂) for `f64` samples.
//!
//! This crate provides a single pure operation: given a slice of finite
//! real numbers, compute Fisher's sample excess kurtosis with the
//! Joanes & Gill bias correction. The result is 0 for a normal
//! distribution, positive for heavy tails (leptokurtic), and negative
//! for light tails (platykurtic).
//!
//! ## Modules
//!
//! - [`kurtosis`](mod@kurtosis) — The four-moment computation and bias correction
//! - [`error`] — Error conditions (`KurtosisError`)
//!
//! ## Design Philosophy
//!
//! - **Numerical stability first**: Kahan compensated summation for the
//!   mean, two-pass central moments
//! - **No unnecessary dependencies**: Pure Rust for core math
//! - **Fail fast**: Invalid input is rejected before any arithmetic,
//!   with contextual errors
//! - **Property-based testing**: Mathematical invariants verified via
//!   proptest

pub mod error;
pub mod kurtosis;

pub use error::KurtosisError;
pub use kurtosis::kurtosis;
