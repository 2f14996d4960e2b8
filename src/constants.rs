//! Numeric constants bounding filter storage
//!
//! These constants define the fixed capacity limits for coefficient
//! arrays and sample histories.

/// Maximum number of numerator or denominator coefficients a filter may hold.
/// Coefficient arrays and sample histories never grow past this length;
/// oversized configurations are rejected at construction.
pub const MAX_LEN: usize = 10;
