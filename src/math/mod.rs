//! Arithmetic utilities for pool calculations.
//!
//! [`CheckedArithmetic`] gives overflow-safe operations on the domain
//! quantity types; [`wide`] holds the 512-bit product-before-division helpers
//! used by pricing and share issuance.

mod checked;
pub mod wide;

pub use checked::CheckedArithmetic;
pub use wide::{mul_div, product, sqrt_product};
