//! Supported rating points

use crate::error::{RecipePageError, Result};
use crate::types::RatingValue;
use serde::{Deserialize, Serialize};

/// Inclusive range of whole rating values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingScale {
    min: i8,
    max: i8,
}

impl RatingScale {
    /// Create a scale; the neutral value 0 must be inside it
    pub fn new(min: i8, max: i8) -> Result<Self> {
        if min >= max {
            return Err(RecipePageError::Config(format!(
                "rating.min ({}) must be below rating.max ({})",
                min, max
            )));
        }
        if min > 0 || max < 0 {
            return Err(RecipePageError::Config(format!(
                "rating range {}..={} must include 0",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    /// Lowest value
    pub fn min(&self) -> i8 {
        self.min
    }

    /// Highest value
    pub fn max(&self) -> i8 {
        self.max
    }

    /// Whether `value` is a supported point
    pub fn contains(&self, value: RatingValue) -> bool {
        (self.min..=self.max).contains(&value.get())
    }

    /// All supported points, lowest first
    pub fn values(&self) -> impl Iterator<Item = RatingValue> {
        (self.min..=self.max).map(RatingValue)
    }

    /// Error for a value outside this scale
    pub fn out_of_range(&self, value: RatingValue) -> RecipePageError {
        RecipePageError::RatingOutOfRange {
            value: value.get(),
            min: self.min,
            max: self.max,
        }
    }
}

impl Default for RatingScale {
    fn default() -> Self {
        Self { min: -5, max: 5 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scale() {
        let scale = RatingScale::default();
        assert_eq!(scale.values().count(), 11);
        assert!(scale.contains(RatingValue(-5)));
        assert!(scale.contains(RatingValue(5)));
        assert!(!scale.contains(RatingValue(6)));
    }

    #[test]
    fn test_invalid_scales() {
        assert!(RatingScale::new(3, 3).is_err());
        assert!(RatingScale::new(1, 5).is_err());
        assert!(RatingScale::new(-5, -1).is_err());
        assert!(RatingScale::new(0, 5).is_ok());
    }
}
