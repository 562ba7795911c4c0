#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// `+ 2 15 = 17`
    /// `- 2 3 = -1`
    /// `* 4 5 = 20`
    Fold,

    /// `* 1 a = a`
    /// `* a 1 = a`
    MultiplyOne,

    /// `* 0 a = 0`
    /// `* a 0 = 0`
    MultiplyZero,

    /// `+ 0 a = a`
    /// `+ a 0 = a`
    AddZero,

    /// `- a 0 = a`
    SubtractZero,

    /// `- a a = 0`
    SubtractSelf,
}
