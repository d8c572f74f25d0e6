//! Directional Monte Carlo sampling of projected areas.
//!
//! Provides:
//! - Uniform sphere direction sampling with optional acceptance filters
//! - Welford running statistics
//! - `SamplerStream`: a shared, subscription-based sample stream
//! - `SampleRecorder` for history capture and JSON export

pub mod direction;
pub mod recorder;
pub mod stats;
pub mod stream;

pub use direction::{
    filtered_direction, filters, uniform_direction, DirectionFilter, MAX_FILTER_ATTEMPTS,
};
pub use recorder::{RecorderStats, SampleRecorder};
pub use stats::RunningMean;
pub use stream::{
    Sample, SamplerStream, SamplerStreamBuilder, SubscriberError, SubscriptionId,
    DEFAULT_INTERVAL_MS, MIN_INTERVAL_MS,
};
