//! View frustum built from a view-projection matrix

use crate::foundation::math::{Mat4, Vec3, Vec4};

/// Points this close outside a plane still count as inside
const PLANE_TOLERANCE: f32 = 1e-4;

/// A plane `normal · p + distance = 0`, normal pointing into the frustum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal
    pub normal: Vec3,
    /// Signed offset from the origin
    pub distance: f32,
}

impl Plane {
    /// Build from `(a, b, c, d)` coefficients, normalizing the result
    fn from_coefficients(coefficients: Vec4) -> Self {
        let normal = Vec3::new(coefficients.x, coefficients.y, coefficients.z);
        let length = normal.magnitude();
        if length <= f32::EPSILON {
            return Self { normal, distance: coefficients.w };
        }
        Self {
            normal: normal / length,
            distance: coefficients.w / length,
        }
    }

    /// Signed distance from point to plane (positive = inside)
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(&point) + self.distance
    }
}

/// Six clipping planes: left, right, bottom, top, near, far
#[derive(Debug, Clone, PartialEq)]
pub struct Frustum {
    planes: [Plane; 6],
}

impl Frustum {
    /// Extract the planes of `view_projection`, assuming clip depth `[0, w]`
    pub fn from_matrix(view_projection: &Mat4) -> Self {
        let row = |i: usize| view_projection.row(i).transpose();
        let (r0, r1, r2, r3) = (row(0), row(1), row(2), row(3));

        Self {
            planes: [
                Plane::from_coefficients(r3 + r0),
                Plane::from_coefficients(r3 - r0),
                Plane::from_coefficients(r3 + r1),
                Plane::from_coefficients(r3 - r1),
                Plane::from_coefficients(r2),
                Plane::from_coefficients(r3 - r2),
            ],
        }
    }

    /// Planes in left, right, bottom, top, near, far order
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// Test if a point is inside the frustum or on its boundary
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(point) >= -PLANE_TOLERANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Mat4Ext;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_frustum_is_the_clip_box() {
        let frustum = Frustum::from_matrix(&Mat4::identity());

        assert!(frustum.contains_point(Vec3::new(0.0, 0.0, 0.5)));
        assert!(frustum.contains_point(Vec3::new(1.0, -1.0, 0.0)));
        assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, -0.5)));
        assert!(!frustum.contains_point(Vec3::new(1.5, 0.0, 0.5)));
    }

    #[test]
    fn test_orthographic_depth_range() {
        let projection = Mat4::orthographic_off_center(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0);
        let frustum = Frustum::from_matrix(&projection);

        assert!(frustum.contains_point(Vec3::new(0.0, 0.0, -5.0)));
        assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, -0.5)));
        assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, -11.0)));
    }

    #[test]
    fn test_planes_are_normalized() {
        let projection = Mat4::orthographic_off_center(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0);
        let [left, right, _, _, near, far] = *Frustum::from_matrix(&projection).planes();

        assert_relative_eq!(left.normal, Vec3::x(), epsilon = 1e-6);
        assert_relative_eq!(left.distance, 1.0, epsilon = 1e-6);
        assert_relative_eq!(right.normal, -Vec3::x(), epsilon = 1e-6);
        assert_relative_eq!(near.normal, -Vec3::z(), epsilon = 1e-6);
        assert_relative_eq!(near.distance, -1.0, epsilon = 1e-6);
        assert_relative_eq!(far.normal, Vec3::z(), epsilon = 1e-6);
        assert_relative_eq!(far.distance, 10.0, epsilon = 1e-5);
    }
}
