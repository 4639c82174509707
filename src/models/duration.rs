use serde::Serialize;
use std::iter::Sum;
use std::ops::Add;

/// Whole calendar months elapsed over a period. Never negative.
///
/// Backed by a `u64`: a single period spans at most a few million months
/// (chrono's year range), so sums only saturate at `u64::MAX`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DurationMonths(u64);

impl DurationMonths {
    pub const ZERO: DurationMonths = DurationMonths(0);

    pub fn new(months: u64) -> Self {
        Self(months)
    }

    pub fn months(&self) -> u64 {
        self.0
    }

    /// Full years contained in the duration.
    pub fn years(&self) -> u64 {
        self.0 / 12
    }

    /// Months left over once full years are taken out.
    pub fn remainder(&self) -> u64 {
        self.0 % 12
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for DurationMonths {
    type Output = DurationMonths;

    fn add(self, rhs: Self) -> Self::Output {
        DurationMonths(self.0.saturating_add(rhs.0))
    }
}

impl Sum for DurationMonths {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(DurationMonths::ZERO, |acc, m| acc + m)
    }
}
