//! Uniform direction sampling over the unit sphere.

use rand::Rng;
use umbra_math::Vec3;

/// Maximum candidate draws per accepted direction when a filter is installed.
pub const MAX_FILTER_ATTEMPTS: usize = 50;

/// Acceptance predicate over candidate directions.
pub type DirectionFilter = Box<dyn Fn(&Vec3) -> bool>;

/// Draw a direction uniformly distributed over the unit sphere.
///
/// Cylindrical equal-area construction: z uniform in [-1, 1], azimuth
/// uniform in [0, 2π). A naive Euler-angle draw would cluster samples at
/// the poles.
pub fn uniform_direction<R: Rng>(rng: &mut R) -> Vec3 {
    let z = 2.0 * rng.gen::<f64>() - 1.0;
    let t = std::f64::consts::TAU * rng.gen::<f64>();
    let r = (1.0 - z * z).max(0.0).sqrt();
    Vec3::new(r * t.cos(), z, r * t.sin()).normalize()
}

/// Draw a direction, resampling until `filter` accepts one or the attempt
/// cap is reached.
///
/// On exhaustion the last-drawn candidate is returned even if rejected, so
/// a pathological filter can never stall the caller.
pub fn filtered_direction<R: Rng>(
    rng: &mut R,
    filter: Option<&DirectionFilter>,
    max_attempts: usize,
) -> Vec3 {
    let mut u = uniform_direction(rng);
    if let Some(accept) = filter {
        let mut attempts = 1;
        while !accept(&u) && attempts < max_attempts {
            u = uniform_direction(rng);
            attempts += 1;
        }
    }
    u
}

/// Common direction filters.
pub mod filters {
    use super::DirectionFilter;
    use umbra_math::Vec3;

    /// Accept directions in the open hemisphere around `axis`.
    pub fn hemisphere(axis: Vec3) -> DirectionFilter {
        Box::new(move |u| u.dot(&axis) > 0.0)
    }

    /// Accept directions with `u · axis > min_dot`.
    ///
    /// A `min_dot` slightly below zero also admits directions grazing the
    /// far side of the plane orthogonal to `axis`.
    pub fn facing(axis: Vec3, min_dot: f64) -> DirectionFilter {
        Box::new(move |u| u.dot(&axis) > min_dot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_directions_are_unit_length() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let u = uniform_direction(&mut rng);
            assert!((u.norm() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_filter_accepted_immediately() {
        let mut rng = StdRng::seed_from_u64(2);
        let filter = filters::facing(Vec3::y(), -2.0); // accepts everything
        for _ in 0..100 {
            let u = filtered_direction(&mut rng, Some(&filter), MAX_FILTER_ATTEMPTS);
            assert!((u.norm() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_hemisphere_filter_respected() {
        let mut rng = StdRng::seed_from_u64(3);
        let filter = filters::hemisphere(Vec3::y());
        for _ in 0..1000 {
            let u = filtered_direction(&mut rng, Some(&filter), MAX_FILTER_ATTEMPTS);
            assert!(u.y > 0.0);
        }
    }

    #[test]
    fn test_impossible_filter_gives_up_after_cap() {
        let calls = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&calls);
        let filter: DirectionFilter = Box::new(move |_| {
            counter.set(counter.get() + 1);
            false
        });
        let mut rng = StdRng::seed_from_u64(4);
        let u = filtered_direction(&mut rng, Some(&filter), MAX_FILTER_ATTEMPTS);
        assert_eq!(calls.get(), MAX_FILTER_ATTEMPTS);
        assert!((u.norm() - 1.0).abs() < 1e-9);
    }
}
