//! Rating selector state

use super::scale::RatingScale;
use super::submitter::{RatingReceipt, RatingSubmitter};
use crate::error::Result;
use crate::types::RatingValue;
use tracing::{debug, info};

/// One star of the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarIndicator {
    /// Value this star stands for
    pub value: RatingValue,
    /// Committed selection
    pub selected: bool,
    /// Hover preview
    pub hovered: bool,
}

impl StarIndicator {
    fn new(value: RatingValue) -> Self {
        Self {
            value,
            selected: false,
            hovered: false,
        }
    }
}

/// Star rating selector
///
/// Holds the committed value, one indicator per supported point, and the
/// live echo text. Hover preview is tracked separately from the selection.
#[derive(Debug, Clone)]
pub struct RatingSelector {
    scale: RatingScale,
    indicators: Vec<StarIndicator>,
    value: RatingValue,
    echo: String,
}

impl RatingSelector {
    /// Create a selector with one indicator per point of `scale`
    pub fn new(scale: RatingScale) -> Self {
        let indicators = scale.values().map(StarIndicator::new).collect();
        Self::from_parts(scale, indicators)
    }

    /// Create a selector for an explicit set of indicator values
    pub fn with_indicators(scale: RatingScale, values: &[i8]) -> Result<Self> {
        let mut indicators = Vec::with_capacity(values.len());
        for &v in values {
            let value = RatingValue(v);
            if !scale.contains(value) {
                return Err(scale.out_of_range(value));
            }
            if !indicators.iter().any(|i: &StarIndicator| i.value == value) {
                indicators.push(StarIndicator::new(value));
            }
        }
        Ok(Self::from_parts(scale, indicators))
    }

    fn from_parts(scale: RatingScale, indicators: Vec<StarIndicator>) -> Self {
        let mut selector = Self {
            scale,
            indicators,
            value: RatingValue::NEUTRAL,
            echo: RatingValue::NEUTRAL.echo(),
        };
        selector.reset();
        selector
    }

    /// Return to the neutral state: 0 selected, nothing hovered
    pub fn reset(&mut self) {
        self.value = RatingValue::NEUTRAL;
        self.echo = self.value.echo();
        for indicator in &mut self.indicators {
            indicator.selected = indicator.value == RatingValue::NEUTRAL;
            indicator.hovered = false;
        }
    }

    fn check(&self, value: RatingValue) -> Result<()> {
        if self.indicators.iter().any(|i| i.value == value) {
            Ok(())
        } else {
            Err(self.scale.out_of_range(value))
        }
    }

    /// Commit a value
    pub fn select(&mut self, value: RatingValue) -> Result<()> {
        self.check(value)?;

        for indicator in &mut self.indicators {
            indicator.selected = indicator.value == value;
        }
        self.value = value;
        self.echo = value.echo();
        debug!("Rating selected: {}", self.echo);
        Ok(())
    }

    /// Show hover feedback for a value
    pub fn preview(&mut self, value: RatingValue) -> Result<()> {
        self.check(value)?;

        for indicator in &mut self.indicators {
            indicator.hovered = indicator.value == value;
        }
        Ok(())
    }

    /// Remove all hover feedback
    pub fn clear_preview(&mut self) {
        for indicator in &mut self.indicators {
            indicator.hovered = false;
        }
    }

    /// Send the committed value through `submitter`
    pub async fn submit(&self, submitter: &dyn RatingSubmitter) -> Result<RatingReceipt> {
        info!("Submitting rating {}", self.echo);
        submitter.submit_rating(self.value).await
    }

    /// Committed value
    pub fn value(&self) -> RatingValue {
        self.value
    }

    /// Live echo text, one decimal place
    pub fn echo(&self) -> &str {
        &self.echo
    }

    /// All indicators, in page order
    pub fn indicators(&self) -> &[StarIndicator] {
        &self.indicators
    }

    /// Currently hovered value
    pub fn hovered(&self) -> Option<RatingValue> {
        self.indicators.iter().find(|i| i.hovered).map(|i| i.value)
    }

    /// Supported scale
    pub fn scale(&self) -> RatingScale {
        self.scale
    }
}

impl Default for RatingSelector {
    fn default() -> Self {
        Self::new(RatingScale::default())
    }
}
