pub mod composer;
pub mod weights;

pub use composer::{RatingBreakdown, RatingComponent, RatingComposer};
pub use weights::{Curve, HltvBaselines, RatingWeights};
