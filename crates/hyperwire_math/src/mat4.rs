//! 4x4 Matrix utilities for 4D rotations
//!
//! In 4D, rotations happen in planes rather than around axes. There are six
//! independent rotation planes: XY, XZ, XW, YZ, YW, ZW. This module provides
//! the elementary rotation generator for each plane, composition of several
//! plane increments, and the orthonormality helpers that keep accumulated
//! orientations from drifting.

use serde::{Deserialize, Serialize};

use crate::Vec4;

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// The 6 rotation planes in 4D space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationPlane {
    /// XY plane - standard yaw (rotation around Z axis in 3D)
    XY,
    /// XZ plane - standard pitch (rotation around Y axis in 3D)
    XZ,
    /// XW plane - ana-kata rotation affecting X
    XW,
    /// YZ plane - standard roll (rotation around X axis in 3D)
    YZ,
    /// YW plane - ana-kata rotation affecting Y
    YW,
    /// ZW plane - ana-kata rotation affecting Z
    ZW,
}

impl RotationPlane {
    /// All six planes, in the canonical composition order: xy, xz, xw, yz, yw, zw.
    pub const ALL: [RotationPlane; 6] = [
        RotationPlane::XY,
        RotationPlane::XZ,
        RotationPlane::XW,
        RotationPlane::YZ,
        RotationPlane::YW,
        RotationPlane::ZW,
    ];

    /// The pair of axis indices spanning this plane (0=X, 1=Y, 2=Z, 3=W)
    #[inline]
    pub fn axes(self) -> (usize, usize) {
        match self {
            RotationPlane::XY => (0, 1),
            RotationPlane::XZ => (0, 2),
            RotationPlane::XW => (0, 3),
            RotationPlane::YZ => (1, 2),
            RotationPlane::YW => (1, 3),
            RotationPlane::ZW => (2, 3),
        }
    }

    /// Lowercase plane key, e.g. "xw"
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            RotationPlane::XY => "xy",
            RotationPlane::XZ => "xz",
            RotationPlane::XW => "xw",
            RotationPlane::YZ => "yz",
            RotationPlane::YW => "yw",
            RotationPlane::ZW => "zw",
        }
    }
}

/// Create a rotation matrix for a single plane.
///
/// The returned matrix rotates within exactly that 2-plane, leaving the
/// orthogonal 2-plane fixed. A positive angle takes the plane's first axis
/// toward its second (X toward Y in the XY plane, and so on).
pub fn plane_rotation(plane: RotationPlane, angle: f32) -> Mat4 {
    let (p1, p2) = plane.axes();
    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = IDENTITY;

    // Rotation in plane p1-p2
    m[p1][p1] = cs;
    m[p2][p2] = cs;
    m[p1][p2] = sn;
    m[p2][p1] = -sn;

    m
}

/// Per-plane rotation increments for one rotate call.
///
/// Planes left at zero contribute no rotation. Planes that share an axis do
/// not commute, so [`compose_plane_rotations`] always applies them in the
/// fixed order xy, xz, xw, yz, yw, zw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaneAngles {
    /// Rotation increment in the XY plane (radians)
    pub xy: f32,
    /// Rotation increment in the XZ plane (radians)
    pub xz: f32,
    /// Rotation increment in the XW plane (radians)
    pub xw: f32,
    /// Rotation increment in the YZ plane (radians)
    pub yz: f32,
    /// Rotation increment in the YW plane (radians)
    pub yw: f32,
    /// Rotation increment in the ZW plane (radians)
    pub zw: f32,
}

impl PlaneAngles {
    /// No rotation in any plane
    pub const ZERO: Self = Self { xy: 0.0, xz: 0.0, xw: 0.0, yz: 0.0, yw: 0.0, zw: 0.0 };

    /// An increment in a single plane
    pub fn single(plane: RotationPlane, angle: f32) -> Self {
        Self::ZERO.with_plane(plane, angle)
    }

    /// Builder-style setter for one plane
    pub fn with_plane(mut self, plane: RotationPlane, angle: f32) -> Self {
        match plane {
            RotationPlane::XY => self.xy = angle,
            RotationPlane::XZ => self.xz = angle,
            RotationPlane::XW => self.xw = angle,
            RotationPlane::YZ => self.yz = angle,
            RotationPlane::YW => self.yw = angle,
            RotationPlane::ZW => self.zw = angle,
        }
        self
    }

    /// The increment for one plane
    #[inline]
    pub fn get(&self, plane: RotationPlane) -> f32 {
        match plane {
            RotationPlane::XY => self.xy,
            RotationPlane::XZ => self.xz,
            RotationPlane::XW => self.xw,
            RotationPlane::YZ => self.yz,
            RotationPlane::YW => self.yw,
            RotationPlane::ZW => self.zw,
        }
    }

    /// Iterate (plane, angle) pairs in the canonical composition order
    pub fn iter(&self) -> impl Iterator<Item = (RotationPlane, f32)> + '_ {
        RotationPlane::ALL.iter().map(move |&p| (p, self.get(p)))
    }

    /// True when every increment is a finite number
    pub fn is_finite(&self) -> bool {
        self.iter().all(|(_, a)| a.is_finite())
    }
}

/// Compose the six per-plane increments into one rotation matrix.
///
/// Planes are applied in the fixed order xy, xz, xw, yz, yw, zw, with xy
/// innermost (applied to the vector first). Increments of zero are skipped.
pub fn compose_plane_rotations(angles: &PlaneAngles) -> Mat4 {
    let mut rot = IDENTITY;
    for (plane, angle) in angles.iter() {
        if angle != 0.0 {
            rot = mul(plane_rotation(plane, angle), rot);
        }
    }
    rot
}

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Transform a Vec4 by a 4x4 matrix (column-major)
///
/// result = M * v
pub fn transform(m: Mat4, v: Vec4) -> Vec4 {
    Vec4::new(
        m[0][0] * v.x + m[1][0] * v.y + m[2][0] * v.z + m[3][0] * v.w,
        m[0][1] * v.x + m[1][1] * v.y + m[2][1] * v.z + m[3][1] * v.w,
        m[0][2] * v.x + m[1][2] * v.y + m[2][2] * v.z + m[3][2] * v.w,
        m[0][3] * v.x + m[1][3] * v.y + m[2][3] * v.z + m[3][3] * v.w,
    )
}

/// Get a column vector from a matrix
pub fn get_column(m: Mat4, col: usize) -> Vec4 {
    Vec4::new(m[col][0], m[col][1], m[col][2], m[col][3])
}

/// Build a matrix from four column vectors
pub fn from_columns(cols: [Vec4; 4]) -> Mat4 {
    [
        [cols[0].x, cols[0].y, cols[0].z, cols[0].w],
        [cols[1].x, cols[1].y, cols[1].z, cols[1].w],
        [cols[2].x, cols[2].y, cols[2].z, cols[2].w],
        [cols[3].x, cols[3].y, cols[3].z, cols[3].w],
    ]
}

/// Transpose a matrix
pub fn transpose(m: Mat4) -> Mat4 {
    [
        [m[0][0], m[1][0], m[2][0], m[3][0]],
        [m[0][1], m[1][1], m[2][1], m[3][1]],
        [m[0][2], m[1][2], m[2][2], m[3][2]],
        [m[0][3], m[1][3], m[2][3], m[3][3]],
    ]
}

/// Check that a matrix is orthonormal within the given tolerance.
///
/// For a rotation matrix, the transpose is the inverse, so Mᵀ·M must be
/// the identity.
pub fn is_orthonormal(m: Mat4, epsilon: f32) -> bool {
    let t = mul(transpose(m), m);
    for i in 0..4 {
        for j in 0..4 {
            let expected = if i == j { 1.0 } else { 0.0 };
            if (t[i][j] - expected).abs() > epsilon {
                return false;
            }
        }
    }
    true
}

/// Re-orthonormalize a near-rotation matrix via modified Gram-Schmidt.
///
/// Long chains of small incremental rotations accumulate floating-point
/// drift; running the columns through Gram-Schmidt snaps the matrix back
/// onto a proper rotation.
pub fn orthonormalize(m: Mat4) -> Mat4 {
    let mut cols = [
        get_column(m, 0),
        get_column(m, 1),
        get_column(m, 2),
        get_column(m, 3),
    ];

    for i in 0..4 {
        for j in 0..i {
            let proj = cols[i].dot(cols[j]);
            cols[i] = cols[i] - cols[j] * proj;
        }
        cols[i] = cols[i].normalized();
    }

    from_columns(cols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec4, b: Vec4) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z) && approx_eq(a.w, b.w)
    }

    fn mat_approx_eq(a: Mat4, b: Mat4) -> bool {
        for i in 0..4 {
            for j in 0..4 {
                if !approx_eq(a[i][j], b[i][j]) {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn test_identity() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let result = transform(IDENTITY, v);
        assert!(vec_approx_eq(v, result));
    }

    #[test]
    fn test_plane_rotation_xy() {
        // 90° in XY: X goes to Y, Y goes to -X, Z and W untouched
        let m = plane_rotation(RotationPlane::XY, FRAC_PI_2);

        assert!(vec_approx_eq(transform(m, Vec4::X), Vec4::Y),
            "X should become Y, got {:?}", transform(m, Vec4::X));
        assert!(vec_approx_eq(transform(m, Vec4::Y), -Vec4::X),
            "Y should become -X, got {:?}", transform(m, Vec4::Y));
        assert!(vec_approx_eq(transform(m, Vec4::Z), Vec4::Z));
        assert!(vec_approx_eq(transform(m, Vec4::W), Vec4::W));
    }

    #[test]
    fn test_plane_rotation_xw() {
        // 90° in XW: X goes to W, the YZ plane is fixed
        let m = plane_rotation(RotationPlane::XW, FRAC_PI_2);

        assert!(vec_approx_eq(transform(m, Vec4::X), Vec4::W),
            "X should become W, got {:?}", transform(m, Vec4::X));
        assert!(vec_approx_eq(transform(m, Vec4::W), -Vec4::X));
        assert!(vec_approx_eq(transform(m, Vec4::Y), Vec4::Y));
        assert!(vec_approx_eq(transform(m, Vec4::Z), Vec4::Z));
    }

    #[test]
    fn test_plane_rotation_zw() {
        let m = plane_rotation(RotationPlane::ZW, FRAC_PI_2);
        assert!(vec_approx_eq(transform(m, Vec4::Z), Vec4::W),
            "Z should become W, got {:?}", transform(m, Vec4::Z));
    }

    #[test]
    fn test_all_generators_orthonormal() {
        for plane in RotationPlane::ALL {
            let m = plane_rotation(plane, 1.234);
            assert!(is_orthonormal(m, EPSILON),
                "{} generator not orthonormal", plane.label());
        }
    }

    #[test]
    fn test_rotation_round_trip() {
        // θ then -θ in the same plane returns to identity
        for plane in RotationPlane::ALL {
            let forward = plane_rotation(plane, 0.7);
            let back = plane_rotation(plane, -0.7);
            assert!(mat_approx_eq(mul(back, forward), IDENTITY),
                "{} round trip did not return to identity", plane.label());
        }
    }

    #[test]
    fn test_rotation_preserves_length() {
        let m = plane_rotation(RotationPlane::YW, 1.23);
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert!(approx_eq(v.length(), transform(m, v).length()));
    }

    #[test]
    fn test_mul_identity() {
        let a = plane_rotation(RotationPlane::XY, 0.5);
        assert!(mat_approx_eq(mul(IDENTITY, a), a));
        assert!(mat_approx_eq(mul(a, IDENTITY), a));
    }

    #[test]
    fn test_mul_composition() {
        // Two 45° rotations equal one 90° rotation
        let r45 = plane_rotation(RotationPlane::XY, FRAC_PI_4);
        let r90 = plane_rotation(RotationPlane::XY, FRAC_PI_2);

        let composed = mul(r45, r45);

        let v = Vec4::new(1.0, 0.0, 0.0, 0.0);
        assert!(vec_approx_eq(transform(composed, v), transform(r90, v)));
    }

    #[test]
    fn test_compose_order_matters() {
        // XY and YZ share the Y axis, so their order changes the result
        let a = PlaneAngles::ZERO.with_plane(RotationPlane::XY, FRAC_PI_2);
        let b = PlaneAngles::ZERO.with_plane(RotationPlane::YZ, FRAC_PI_2);

        let ab = mul(compose_plane_rotations(&b), compose_plane_rotations(&a));
        let ba = mul(compose_plane_rotations(&a), compose_plane_rotations(&b));

        assert!(!mat_approx_eq(ab, ba), "shared-axis rotations should not commute");
    }

    #[test]
    fn test_compose_applies_xy_first() {
        // With xy=90° and yz=90°: X -> Y (xy), then Y -> Z (yz)
        let angles = PlaneAngles { xy: FRAC_PI_2, yz: FRAC_PI_2, ..PlaneAngles::ZERO };
        let m = compose_plane_rotations(&angles);
        assert!(vec_approx_eq(transform(m, Vec4::X), Vec4::Z),
            "expected X -> Z, got {:?}", transform(m, Vec4::X));
    }

    #[test]
    fn test_compose_is_orthonormal() {
        let angles = PlaneAngles { xy: 0.3, xz: -0.2, xw: 0.9, yz: 0.1, yw: -0.4, zw: 0.6 };
        let m = compose_plane_rotations(&angles);
        assert!(is_orthonormal(m, EPSILON));
    }

    #[test]
    fn test_compose_zero_is_identity() {
        assert!(mat_approx_eq(compose_plane_rotations(&PlaneAngles::ZERO), IDENTITY));
    }

    #[test]
    fn test_full_revolution() {
        let half = plane_rotation(RotationPlane::XW, PI);
        assert!(mat_approx_eq(mul(half, half), IDENTITY));
    }

    #[test]
    fn test_get_column() {
        let m = plane_rotation(RotationPlane::YZ, 0.5);
        let col0 = get_column(m, 0);
        assert!(vec_approx_eq(col0, Vec4::X),
            "Column 0 should be the X axis for a YZ rotation");
    }

    #[test]
    fn test_from_columns_round_trip() {
        let m = plane_rotation(RotationPlane::XW, 0.8);
        let rebuilt = from_columns([
            get_column(m, 0),
            get_column(m, 1),
            get_column(m, 2),
            get_column(m, 3),
        ]);
        assert!(mat_approx_eq(m, rebuilt));
    }

    #[test]
    fn test_transpose_is_inverse_for_rotations() {
        let m = plane_rotation(RotationPlane::YW, 1.1);
        assert!(mat_approx_eq(mul(transpose(m), m), IDENTITY));
    }

    #[test]
    fn test_orthonormalize_fixes_drift() {
        // Scale one column slightly to simulate accumulated drift
        let mut m = plane_rotation(RotationPlane::XZ, 0.4);
        for row in 0..4 {
            m[0][row] *= 1.01;
        }
        assert!(!is_orthonormal(m, 0.0001));

        let fixed = orthonormalize(m);
        assert!(is_orthonormal(fixed, EPSILON));
    }

    #[test]
    fn test_plane_angles_single() {
        let angles = PlaneAngles::single(RotationPlane::ZW, 0.25);
        assert_eq!(angles.zw, 0.25);
        assert_eq!(angles.xy, 0.0);
        assert_eq!(angles.get(RotationPlane::ZW), 0.25);
    }

    #[test]
    fn test_plane_angles_is_finite() {
        assert!(PlaneAngles::ZERO.is_finite());
        assert!(!PlaneAngles::single(RotationPlane::XW, f32::NAN).is_finite());
        assert!(!PlaneAngles::single(RotationPlane::YZ, f32::INFINITY).is_finite());
    }

    #[test]
    fn test_plane_axes() {
        assert_eq!(RotationPlane::XY.axes(), (0, 1));
        assert_eq!(RotationPlane::ZW.axes(), (2, 3));
    }
}
