use serde::{Deserialize, Serialize};
use std::fmt;

/// Community rating of a book.
///
/// The format declares it as a decimal with two fraction digits between 0.00
/// and 5.00. Construction never rejects a value, out of range ratings are
/// reported by [`crate::validation::validate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(f32);

impl Rating {
    pub const MIN: Rating = Rating(0.0);
    pub const MAX: Rating = Rating(5.0);

    pub const fn new(value: f32) -> Self {
        Rating(value)
    }

    pub const fn value(self) -> f32 {
        self.0
    }

    /// Inclusive on both ends. NaN is never in range.
    pub fn is_in_range(self) -> bool {
        (Self::MIN.0..=Self::MAX.0).contains(&self.0)
    }

    /// Rounds to two fraction digits.
    pub fn rounded(self) -> Self {
        Rating((self.0 * 100.0).round() / 100.0)
    }
}

impl From<f32> for Rating {
    fn from(value: f32) -> Self {
        Rating(value)
    }
}

impl From<Rating> for f32 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
