//! Convex bodies and their projected silhouettes.

use crate::hull::{convex_hull, polygon_area};
use crate::{orthonormal_basis, Mat3, Vec2, Vec3};

/// Convex body represented by its vertex cloud and closed-form surface area.
///
/// Only the vertices participate in silhouette queries; faces are implied
/// by convexity. The surface area feeds the Cauchy target `S/4` and is
/// supplied by the constructor rather than recovered from the cloud.
#[derive(Debug, Clone)]
pub struct ConvexBody {
    vertices: Vec<Vec3>,
    surface_area: f64,
}

impl ConvexBody {
    /// Create a body from an arbitrary convex vertex cloud.
    pub fn new(vertices: Vec<Vec3>, surface_area: f64) -> Self {
        Self {
            vertices,
            surface_area,
        }
    }

    /// Unit cube centered at the origin (surface area 6).
    pub fn unit_cube() -> Self {
        Self::cuboid(Vec3::new(0.5, 0.5, 0.5))
    }

    /// Axis-aligned cuboid with the given half-extents, centered at the origin.
    pub fn cuboid(half_extents: Vec3) -> Self {
        let h = half_extents;
        let vertices = vec![
            Vec3::new(-h.x, -h.y, -h.z),
            Vec3::new(-h.x, -h.y, h.z),
            Vec3::new(-h.x, h.y, -h.z),
            Vec3::new(-h.x, h.y, h.z),
            Vec3::new(h.x, -h.y, -h.z),
            Vec3::new(h.x, -h.y, h.z),
            Vec3::new(h.x, h.y, -h.z),
            Vec3::new(h.x, h.y, h.z),
        ];
        let (a, b, c) = (2.0 * h.x, 2.0 * h.y, 2.0 * h.z);
        let surface_area = 2.0 * (a * b + b * c + c * a);
        Self {
            vertices,
            surface_area,
        }
    }

    /// The same body with every vertex rotated by `rot`.
    ///
    /// Rotation preserves the surface area.
    pub fn rotated(&self, rot: &Mat3) -> Self {
        Self {
            vertices: self.vertices.iter().map(|v| rot * v).collect(),
            surface_area: self.surface_area,
        }
    }

    /// Body vertices.
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Total surface area.
    pub fn surface_area(&self) -> f64 {
        self.surface_area
    }

    /// Direction-averaged projected area, S/4 by Cauchy's formula.
    pub fn mean_projected_area(&self) -> f64 {
        self.surface_area / 4.0
    }

    /// Silhouette polygon: convex hull of the vertices projected onto the
    /// plane orthogonal to `u`.
    pub fn silhouette(&self, u: &Vec3) -> Vec<Vec2> {
        let (e1, e2) = orthonormal_basis(u);
        let pts: Vec<Vec2> = self
            .vertices
            .iter()
            .map(|v| Vec2::new(v.dot(&e1), v.dot(&e2)))
            .collect();
        convex_hull(&pts)
    }

    /// Area of the silhouette along `u`.
    pub fn projected_area(&self, u: &Vec3) -> f64 {
        polygon_area(&self.silhouette(u))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cube_axis_projection_is_unit_square() {
        let cube = ConvexBody::unit_cube();
        for u in [Vec3::x(), Vec3::y(), Vec3::z(), -Vec3::y()] {
            assert_relative_eq!(cube.projected_area(&u), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_cube_diagonal_projection_is_hexagon() {
        let cube = ConvexBody::unit_cube();
        let u = Vec3::new(1.0, 1.0, 1.0).normalize();
        let silhouette = cube.silhouette(&u);
        assert_eq!(silhouette.len(), 6);
        assert_relative_eq!(cube.projected_area(&u), 3.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_cube_cauchy_target() {
        let cube = ConvexBody::unit_cube();
        assert_relative_eq!(cube.surface_area(), 6.0);
        assert_relative_eq!(cube.mean_projected_area(), 1.5);
    }

    #[test]
    fn test_cuboid_closed_forms() {
        // Full extents 2 x 1 x 4.
        let body = ConvexBody::cuboid(Vec3::new(1.0, 0.5, 2.0));
        assert_relative_eq!(body.surface_area(), 2.0 * (2.0 + 4.0 + 8.0));
        assert_relative_eq!(body.projected_area(&Vec3::x()), 4.0, epsilon = 1e-12);
        assert_relative_eq!(body.projected_area(&Vec3::y()), 8.0, epsilon = 1e-12);
        assert_relative_eq!(body.projected_area(&Vec3::z()), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotated_cube_projection() {
        // 45° about Y: the X-axis silhouette becomes √2 wide, 1 tall.
        let angle = std::f64::consts::FRAC_PI_4;
        let rot = Mat3::new(
            angle.cos(),
            0.0,
            angle.sin(),
            0.0,
            1.0,
            0.0,
            -angle.sin(),
            0.0,
            angle.cos(),
        );
        let cube = ConvexBody::unit_cube().rotated(&rot);
        assert_relative_eq!(cube.surface_area(), 6.0);
        assert_relative_eq!(
            cube.projected_area(&Vec3::x()),
            2.0_f64.sqrt(),
            epsilon = 1e-12
        );
        assert_relative_eq!(cube.projected_area(&Vec3::y()), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_projected_area_direction_sign_invariant() {
        let cube = ConvexBody::unit_cube();
        let u = Vec3::new(0.3, -0.8, 0.52).normalize();
        assert_relative_eq!(
            cube.projected_area(&u),
            cube.projected_area(&(-u)),
            epsilon = 1e-12
        );
    }
}
