//! Star rating widget

pub mod scale;
pub mod selector;
pub mod submitter;

pub use scale::RatingScale;
pub use selector::{RatingSelector, StarIndicator};
pub use submitter::{PendingRatingSubmitter, RatingReceipt, RatingSubmitter};
