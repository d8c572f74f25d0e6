//! 2D hemisphere visibility with angular occluders.
//!
//! Models the cosine-weighted occlusion picture: rays leave a surface
//! point across a half-disc of directions, some angular ranges are blocked
//! by occluders, and each clear direction contributes with weight cos θ
//! against the surface normal.

use std::cmp::Ordering;

/// Angular range blocked by an occluder, in degrees from the surface normal.
///
/// Negative angles lie left of the normal, positive right; the hemisphere
/// spans [-90, 90]. `distance` is the fraction of the ray length at which
/// the blocker sits, for callers that need the hit point.
#[derive(Debug, Clone, Copy)]
pub struct AngularOccluder {
    pub start_deg: f64,
    pub end_deg: f64,
    pub distance: f64,
}

/// Hemisphere of directions above a surface point, with occluders.
#[derive(Debug, Clone, Default)]
pub struct Hemisphere2d {
    occluders: Vec<AngularOccluder>,
}

impl Hemisphere2d {
    /// Hemisphere with the given occluders.
    pub fn new(occluders: Vec<AngularOccluder>) -> Self {
        Self { occluders }
    }

    /// Fully open hemisphere.
    pub fn open() -> Self {
        Self::default()
    }

    /// Installed occluders.
    pub fn occluders(&self) -> &[AngularOccluder] {
        &self.occluders
    }

    /// First occluder covering the ray at `angle_deg`, if any.
    pub fn hit(&self, angle_deg: f64) -> Option<&AngularOccluder> {
        self.occluders
            .iter()
            .find(|o| angle_deg >= o.start_deg && angle_deg <= o.end_deg)
    }

    /// Visibility V(x, ω): true when the ray at `angle_deg` escapes.
    pub fn visibility(&self, angle_deg: f64) -> bool {
        self.hit(angle_deg).is_none()
    }

    /// Cosine-weighted fraction of the hemisphere left open.
    ///
    /// ∫ V(ω) cos θ dθ over [-90°, 90°], normalized by the unoccluded
    /// value 2. Per clear closed form, each blocked span [θ₁, θ₂]
    /// removes sin θ₂ − sin θ₁; overlapping occluders are merged first
    /// so shared coverage is not subtracted twice.
    pub fn cosine_weighted_openness(&self) -> f64 {
        let mut spans: Vec<(f64, f64)> = self
            .occluders
            .iter()
            .map(|o| (o.start_deg.max(-90.0), o.end_deg.min(90.0)))
            .filter(|(s, e)| e > s)
            .collect();
        spans.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

        let mut blocked = 0.0;
        let mut current: Option<(f64, f64)> = None;
        for (s, e) in spans {
            current = match current {
                Some((cs, ce)) if s <= ce => Some((cs, ce.max(e))),
                Some((cs, ce)) => {
                    blocked += ce.to_radians().sin() - cs.to_radians().sin();
                    Some((s, e))
                }
                None => Some((s, e)),
            };
        }
        if let Some((cs, ce)) = current {
            blocked += ce.to_radians().sin() - cs.to_radians().sin();
        }
        1.0 - blocked / 2.0
    }
}
