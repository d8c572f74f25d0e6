//! umbra — Monte Carlo estimation of average projected (shadow) areas.
//!
//! This is the umbrella crate that re-exports the geometry and sampling
//! crates.
//!
//! The headline quantity: for a convex body, the projected area averaged
//! over uniformly random directions equals one quarter of its surface
//! area (Cauchy's formula), which is 3/2 for the unit cube.

pub use umbra_math::{
    self, hull, occlusion, orthonormal_basis, AngularOccluder, ConvexBody, Hemisphere2d, Mat3,
    Vec2, Vec3,
};
pub use umbra_sampler::{
    self, filtered_direction, filters, uniform_direction, DirectionFilter, RecorderStats,
    RunningMean, Sample, SampleRecorder, SamplerStream, SamplerStreamBuilder, SubscriberError,
    SubscriptionId, DEFAULT_INTERVAL_MS, MAX_FILTER_ATTEMPTS, MIN_INTERVAL_MS,
};
