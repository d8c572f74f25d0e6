//! Shared sample stream: directional samples produced on a cadence and
//! fanned out to subscribers.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::warn;
use umbra_math::{ConvexBody, Vec3};

use crate::direction::{filtered_direction, DirectionFilter, MAX_FILTER_ATTEMPTS};
use crate::stats::RunningMean;

/// Default sampling cadence in milliseconds.
pub const DEFAULT_INTERVAL_MS: f64 = 1200.0;

/// Lower bound on the configurable cadence.
pub const MIN_INTERVAL_MS: f64 = 50.0;

/// One accepted sample, or the current-state snapshot delivered at
/// subscription time.
///
/// Immutable once produced; every subscriber observes identical values.
#[derive(Debug, Clone)]
pub struct Sample {
    /// Unit direction the body was projected along.
    pub direction: Vec3,
    /// Projected area for this direction; `None` only in registration
    /// snapshots.
    pub area: Option<f64>,
    /// 1-based count of accepted samples.
    pub seq: u64,
    /// Running mean of projected area over all accepted samples.
    pub mean: f64,
    /// Expected mean, surface area / 4 (Cauchy's formula).
    pub target: f64,
    /// Total surface area of the sampled body.
    pub reference_area: f64,
}

impl Sample {
    /// Signed gap between the running mean and the Cauchy target.
    pub fn error(&self) -> f64 {
        self.mean - self.target
    }
}

/// Failure reported by a subscriber callback.
///
/// Logged at the fan-out boundary; never interrupts delivery to other
/// subscribers or the sampling loop.
#[derive(Debug, Error)]
#[error("subscriber failed: {0}")]
pub struct SubscriberError(pub String);

/// Token identifying a registered subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&Sample) -> Result<(), SubscriberError>>;

/// Shared directional sample stream.
///
/// Draws a uniformly random direction on a configurable cadence, projects
/// the body along it, folds the area into a running mean, and delivers an
/// immutable [`Sample`] to every subscriber in registration order. Driven
/// cooperatively: the host calls [`tick`](Self::tick) once per frame with
/// its clock in milliseconds. All work per tick is synchronous and
/// bounded.
pub struct SamplerStream<R: Rng = StdRng> {
    body: ConvexBody,
    rng: R,
    interval_ms: f64,
    last_ms: Option<f64>,
    started: bool,
    filter: Option<DirectionFilter>,
    subscribers: Vec<(SubscriptionId, Callback)>,
    next_id: u64,
    stats: RunningMean,
    last_direction: Option<Vec3>,
    target: f64,
    reference_area: f64,
}

impl SamplerStream<StdRng> {
    /// Stream over `body` with an entropy-seeded RNG.
    pub fn new(body: ConvexBody) -> Self {
        Self::with_rng(body, StdRng::from_entropy())
    }

    /// Stream over `body` with a deterministic seed.
    pub fn seeded(body: ConvexBody, seed: u64) -> Self {
        Self::with_rng(body, StdRng::seed_from_u64(seed))
    }

    /// Start building a stream with non-default configuration.
    pub fn builder(body: ConvexBody) -> SamplerStreamBuilder {
        SamplerStreamBuilder::new(body)
    }
}

impl<R: Rng> SamplerStream<R> {
    /// Stream over `body` drawing randomness from `rng`.
    pub fn with_rng(body: ConvexBody, rng: R) -> Self {
        let reference_area = body.surface_area();
        Self {
            body,
            rng,
            interval_ms: DEFAULT_INTERVAL_MS,
            last_ms: None,
            started: false,
            filter: None,
            subscribers: Vec::new(),
            next_id: 0,
            stats: RunningMean::new(),
            last_direction: None,
            target: reference_area / 4.0,
            reference_area,
        }
    }

    /// Register `callback` to receive every future accepted sample.
    ///
    /// Starts the sampling loop on first subscription. If a sample has
    /// already been produced, the callback is invoked once immediately
    /// with the current-state snapshot (`area: None`) before any live
    /// sample arrives.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Sample) -> Result<(), SubscriberError> + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.started = true;

        let mut callback: Callback = Box::new(callback);
        if let Some(direction) = self.last_direction {
            let snapshot = self.snapshot(direction);
            if let Err(error) = callback(&snapshot) {
                warn!(subscriber = id.0, %error, "subscriber failed on snapshot");
            }
        }
        self.subscribers.push((id, callback));
        id
    }

    /// Remove a subscriber. Unknown or already-removed ids are no-ops.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }

    /// Set the minimum elapsed time between accepted samples.
    ///
    /// Non-finite input is ignored; finite input is clamped to the
    /// [`MIN_INTERVAL_MS`] floor. Takes effect at the next tick
    /// evaluation.
    pub fn set_interval_ms(&mut self, ms: f64) {
        if !ms.is_finite() {
            return;
        }
        self.interval_ms = ms.max(MIN_INTERVAL_MS);
    }

    /// Current sampling cadence in milliseconds.
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Install or clear the direction acceptance filter.
    ///
    /// Configuration is global to the stream: the last caller wins. Each
    /// tick resamples up to [`MAX_FILTER_ATTEMPTS`] candidates, then uses
    /// the last one regardless.
    pub fn set_direction_filter(&mut self, filter: Option<DirectionFilter>) {
        self.filter = filter;
    }

    /// The body being projected.
    pub fn body(&self) -> &ConvexBody {
        &self.body
    }

    /// Number of accepted samples so far.
    pub fn sample_count(&self) -> u64 {
        self.stats.count()
    }

    /// Running mean of the projected area.
    pub fn running_mean(&self) -> f64 {
        self.stats.mean()
    }

    /// Full running statistics.
    pub fn stats(&self) -> &RunningMean {
        &self.stats
    }

    /// Expected mean projected area, S/4.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Surface area of the body.
    pub fn reference_area(&self) -> f64 {
        self.reference_area
    }

    /// Last accepted direction, if any sample has been produced.
    pub fn last_direction(&self) -> Option<Vec3> {
        self.last_direction
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Advance the stream to `now_ms`, producing at most one sample.
    ///
    /// No-op until the first subscription has started the loop. The first
    /// call after starting latches the timebase; afterwards a sample is
    /// produced whenever the configured interval has elapsed since the
    /// previous one. Runs whether or not subscribers remain.
    pub fn tick(&mut self, now_ms: f64) {
        if !self.started {
            return;
        }
        let last = match self.last_ms {
            Some(t) => t,
            None => {
                self.last_ms = Some(now_ms);
                return;
            }
        };
        if now_ms - last < self.interval_ms {
            return;
        }
        self.last_ms = Some(now_ms);

        let direction =
            filtered_direction(&mut self.rng, self.filter.as_ref(), MAX_FILTER_ATTEMPTS);
        let area = self.body.projected_area(&direction);
        self.stats.push(area);
        self.last_direction = Some(direction);

        let sample = Sample {
            direction,
            area: Some(area),
            seq: self.stats.count(),
            mean: self.stats.mean(),
            target: self.target,
            reference_area: self.reference_area,
        };
        for (id, callback) in &mut self.subscribers {
            if let Err(error) = callback(&sample) {
                warn!(subscriber = id.0, %error, "subscriber failed; continuing delivery");
            }
        }
    }

    fn snapshot(&self, direction: Vec3) -> Sample {
        Sample {
            direction,
            area: None,
            seq: self.stats.count(),
            mean: self.stats.mean(),
            target: self.target,
            reference_area: self.reference_area,
        }
    }
}

/// Builder for [`SamplerStream`] configuration.
pub struct SamplerStreamBuilder {
    body: ConvexBody,
    interval_ms: f64,
    seed: Option<u64>,
    filter: Option<DirectionFilter>,
}

impl SamplerStreamBuilder {
    fn new(body: ConvexBody) -> Self {
        Self {
            body,
            interval_ms: DEFAULT_INTERVAL_MS,
            seed: None,
            filter: None,
        }
    }

    /// Sampling cadence in milliseconds (clamped to the floor on build).
    pub fn interval_ms(mut self, ms: f64) -> Self {
        self.interval_ms = ms;
        self
    }

    /// Deterministic RNG seed; entropy-seeded when unset.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Direction acceptance filter.
    pub fn filter(mut self, filter: DirectionFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Finish building the stream.
    pub fn build(self) -> SamplerStream<StdRng> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut stream = SamplerStream::with_rng(self.body, rng);
        stream.set_interval_ms(self.interval_ms);
        stream.filter = self.filter;
        stream
    }
}
