pub mod envelope;
mod lenient;
pub mod restaurant;
pub mod review;

pub use envelope::{ApiEnvelope, ReviewsPayload};
pub use restaurant::{RatingSummary, RestaurantSummary, RestaurantType};
pub use review::{Provider, ReviewDraft, ReviewRecord, ReviewSubmission};
