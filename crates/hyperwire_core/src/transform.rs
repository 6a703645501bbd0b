//! 4D object transform (position and accumulated orientation)
//!
//! An ObjectTransform owns the position and orientation of a single
//! polytope instance. Orientation accumulates by left-multiplying small
//! rotation increments, which is how continuous spin across several planes
//! at once is driven: each input tick contributes one increment.

use hyperwire_math::{mat4, GeometryError, Mat4, PlaneAngles, Vec4};

/// Position and orientation of one polytope instance in 4D space
///
/// Mutated only through [`set_position`](Self::set_position),
/// [`translate`](Self::translate), and [`rotate`](Self::rotate); never
/// shared between two polytope instances.
#[derive(Clone, Copy, Debug)]
pub struct ObjectTransform {
    position: Vec4,
    orientation: Mat4,
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ObjectTransform {
    /// Create an identity transform (origin position, no rotation)
    pub fn identity() -> Self {
        Self {
            position: Vec4::ZERO,
            orientation: mat4::IDENTITY,
        }
    }

    /// Create a transform with just a position
    pub fn from_position(position: Vec4) -> Self {
        Self {
            position,
            orientation: mat4::IDENTITY,
        }
    }

    /// Current position
    #[inline]
    pub fn position(&self) -> Vec4 {
        self.position
    }

    /// Current orientation matrix
    #[inline]
    pub fn orientation(&self) -> Mat4 {
        self.orientation
    }

    /// Set the position absolutely
    pub fn set_position(&mut self, position: Vec4) {
        self.position = position;
    }

    /// Translate by a delta
    pub fn translate(&mut self, delta: Vec4) {
        self.position += delta;
    }

    /// Rotate by the given per-plane increments.
    ///
    /// The increments compose in the fixed order xy, xz, xw, yz, yw, zw
    /// (xy applied first); planes left at zero contribute nothing. The
    /// composed increment is left-multiplied onto the current orientation,
    /// so repeated small calls accumulate. Planes sharing an axis do not
    /// commute; callers that need a different order can issue several calls,
    /// one plane at a time.
    ///
    /// Non-finite increments are rejected at this call.
    pub fn rotate(&mut self, angles: &PlaneAngles) -> Result<(), GeometryError> {
        for (plane, angle) in angles.iter() {
            if !angle.is_finite() {
                return Err(GeometryError::invalid_parameter(plane.label(), angle));
            }
        }
        let step = mat4::compose_plane_rotations(angles);
        self.orientation = mat4::mul(step, self.orientation);
        Ok(())
    }

    /// Snap the orientation back onto a proper rotation matrix.
    ///
    /// Long chains of incremental rotations accumulate floating-point
    /// drift; calling this occasionally keeps the orientation orthonormal.
    pub fn renormalize(&mut self) {
        self.orientation = mat4::orthonormalize(self.orientation);
    }

    /// Transform a point from local space to world space
    ///
    /// Applies the orientation, then the translation.
    pub fn transform_point(&self, p: Vec4) -> Vec4 {
        mat4::transform(self.orientation, p) + self.position
    }
}
