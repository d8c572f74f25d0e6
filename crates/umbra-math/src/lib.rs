//! Geometry primitives for the umbra shadow-sampling toolkit.
//!
//! Provides nalgebra-based aliases, projection-plane basis construction,
//! 2D convex hulls, convex bodies with silhouette queries, and a 2D
//! hemisphere occlusion model.

pub mod body;
pub mod hull;
pub mod occlusion;

pub use body::ConvexBody;
pub use occlusion::{AngularOccluder, Hemisphere2d};

use nalgebra as na;

/// 2D vector alias.
pub type Vec2 = na::Vector2<f64>;
/// 3D vector alias.
pub type Vec3 = na::Vector3<f64>;
/// 3x3 matrix alias.
pub type Mat3 = na::Matrix3<f64>;

/// Orthonormal basis (e1, e2) of the plane orthogonal to `u`.
///
/// Picks a reference axis not nearly parallel to `u` (Y unless |u.y| ≥ 0.9,
/// then X), crosses it with `u` for e1, and closes the frame with u × e1.
pub fn orthonormal_basis(u: &Vec3) -> (Vec3, Vec3) {
    let a = if u.y.abs() < 0.9 { Vec3::y() } else { Vec3::x() };
    let e1 = a.cross(u).normalize();
    let e2 = u.cross(&e1).normalize();
    (e1, e2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basis_is_orthonormal() {
        let dirs = [
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(1.0, 1.0, 1.0).normalize(),
            Vec3::new(-0.3, 0.95, 0.1).normalize(),
        ];
        for u in &dirs {
            let (e1, e2) = orthonormal_basis(u);
            assert!((e1.norm() - 1.0).abs() < 1e-12);
            assert!((e2.norm() - 1.0).abs() < 1e-12);
            assert!(e1.dot(u).abs() < 1e-12);
            assert!(e2.dot(u).abs() < 1e-12);
            assert!(e1.dot(&e2).abs() < 1e-12);
        }
    }

    #[test]
    fn test_basis_avoids_parallel_reference() {
        // Nearly-Y directions must switch to the X reference axis.
        let u = Vec3::new(1e-8, 1.0, 0.0).normalize();
        let (e1, e2) = orthonormal_basis(&u);
        assert!(e1.norm().is_finite());
        assert!(e2.norm().is_finite());
        assert!((e1.norm() - 1.0).abs() < 1e-9);
    }
}
