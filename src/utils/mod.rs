//! Supporting data structures and numeric helpers.

use num::{One, Zero};

pub mod queue;
pub mod set;

pub use queue::*;
pub use set::*;

/// Helper for numeric types that can represent probabilities.
pub trait Probability: Zero + One + PartialOrd + Sized {
    /// Returns *true* if the value lies in `[0, 1]`.
    fn is_valid_probability(&self) -> bool {
        Self::zero() <= *self && *self <= Self::one()
    }
}

impl<T: Zero + One + PartialOrd> Probability for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probability_bounds() {
        assert!(0.0f64.is_valid_probability());
        assert!(0.5f64.is_valid_probability());
        assert!(1.0f64.is_valid_probability());
        assert!(!(-0.1f64).is_valid_probability());
        assert!(!1.1f64.is_valid_probability());
    }
}
