// Copyright (c) 2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The `rotation` module contains the `RotationMatrix` type, which rotates
//! `NVector`s about the axes of the sphere.
//!
//! A map centred on (longitude, latitude) with a given orientation is
//! produced by rotating the sphere so that the map centre is at (0°, 0°)
//! with the map's up direction towards the North pole:
//!
//! 1. rotate about the z axis (the polar axis) by the longitude;
//! 2. rotate about the y axis by the latitude;
//! 3. rotate about the x axis (the axis through (0°, 0°)) by the orientation.

use crate::{Angle, Degrees, Matrix3, NVector};
use core::ops::Mul;

/// A 3x3 rotation matrix.
///
/// A `RotationMatrix` can only be built from rotations about the axes of
/// the sphere, so it is always orthonormal with a determinant of +1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationMatrix(Matrix3<f64>);

impl RotationMatrix {
    /// The identity rotation.
    #[must_use]
    pub fn identity() -> Self {
        Self(Matrix3::identity())
    }

    /// A rotation about the x axis, the axis through (0°, 0°).
    /// * `angle` - the rotation angle.
    #[must_use]
    pub fn rotate_x(angle: Angle) -> Self {
        let (sin_a, cos_a) = (angle.sin().0, angle.cos().0);
        Self(Matrix3::new(
            1.0, 0.0, 0.0, //
            0.0, cos_a, sin_a, //
            0.0, -sin_a, cos_a,
        ))
    }

    /// A rotation about the y axis, the axis through (90°E, 0°).
    /// Moves positions at latitude `angle` on the prime meridian to the Equator.
    /// * `angle` - the rotation angle.
    #[must_use]
    pub fn rotate_y(angle: Angle) -> Self {
        let (sin_a, cos_a) = (angle.sin().0, angle.cos().0);
        Self(Matrix3::new(
            cos_a, 0.0, sin_a, //
            0.0, 1.0, 0.0, //
            -sin_a, 0.0, cos_a,
        ))
    }

    /// A rotation about the z axis, the polar axis.
    /// Moves positions at longitude `angle` to the prime meridian.
    /// * `angle` - the rotation angle.
    #[must_use]
    pub fn rotate_z(angle: Angle) -> Self {
        let (sin_a, cos_a) = (angle.sin().0, angle.cos().0);
        Self(Matrix3::new(
            cos_a, sin_a, 0.0, //
            -sin_a, cos_a, 0.0, //
            0.0, 0.0, 1.0,
        ))
    }

    /// A rotation of the map orientation about the x axis.
    ///
    /// Orientation is a bearing: measured clockwise from North, the opposite
    /// sense to `rotate_x`. So the orientation rotation is the inverse, i.e.
    /// the transpose, of `rotate_x`.
    /// * `orientation` - the bearing of the map's up direction.
    #[must_use]
    pub fn orientation(orientation: Angle) -> Self {
        Self::rotate_x(orientation).transpose()
    }

    /// The transpose of the rotation, which is also its inverse.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self(self.0.transpose())
    }

    /// Compose the rotation from (0°, 0°, true north up) to a map centre and
    /// orientation.
    ///
    /// The rotations are applied longitude first, then latitude, then
    /// orientation: `orientation * latitude * longitude`.
    /// * `orientation` - the bearing of the map's up direction.
    /// * `lat` - the latitude of the map centre.
    /// * `lon` - the longitude of the map centre.
    ///
    /// # Examples
    /// ```
    /// use nvector_map::{Degrees, NVector, RotationMatrix};
    /// use angle_sc::is_within_tolerance;
    ///
    /// let rotation = RotationMatrix::compose(Degrees(0.0), Degrees(51.5), Degrees(-3.0));
    /// let centre = NVector::from_degrees(Degrees(-3.0), Degrees(51.5));
    /// let result = rotation.transform(&centre);
    /// assert!(is_within_tolerance(0.0, result.longitude().0, 1e-12));
    /// assert!(is_within_tolerance(0.0, result.latitude().0, 1e-12));
    /// ```
    #[must_use]
    pub fn compose(orientation: Degrees, lat: Degrees, lon: Degrees) -> Self {
        Self::orientation(Angle::from(orientation))
            * Self::rotate_y(Angle::from(lat))
            * Self::rotate_z(Angle::from(lon))
    }

    /// The underlying matrix.
    #[must_use]
    pub const fn matrix(&self) -> &Matrix3<f64> {
        &self.0
    }

    /// Rotate a position.
    ///
    /// The result is re-normalised to remove rounding errors accumulated
    /// by composing rotations.
    /// * `point` - the position to rotate.
    #[must_use]
    pub fn transform(&self, point: &NVector) -> NVector {
        NVector((self.0 * point.as_vector()).normalize())
    }
}

impl Default for RotationMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for RotationMatrix {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    fn assert_is_rotation(rotation: &RotationMatrix) {
        let m = rotation.matrix();
        let product = m * m.transpose();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(is_within_tolerance(
                    expected,
                    product[(i, j)],
                    4.0 * f64::EPSILON
                ));
            }
        }
        assert!(is_within_tolerance(
            1.0,
            m.determinant(),
            4.0 * f64::EPSILON
        ));
    }

    #[test]
    fn test_rotation_matrix_traits() {
        let rotation = RotationMatrix::default();
        assert_eq!(RotationMatrix::identity(), rotation);
        assert_eq!(Matrix3::identity(), *rotation.matrix());

        let rotation_clone = rotation;
        assert!(rotation_clone == rotation);

        println!("RotationMatrix: {:?}", rotation);
    }

    #[test]
    fn test_elementary_rotations() {
        let angle = Angle::from(Degrees(90.0));

        let x = NVector::from_degrees(Degrees(0.0), Degrees(0.0));
        let y = NVector::from_degrees(Degrees(90.0), Degrees(0.0));
        let z = NVector::from_degrees(Degrees(0.0), Degrees(90.0));

        // rotate_z moves 90°E to the prime meridian
        let result = RotationMatrix::rotate_z(angle).transform(&y);
        assert!(is_within_tolerance(1.0, result.x(), f64::EPSILON));

        // rotate_y moves the North pole to the Equator
        let result = RotationMatrix::rotate_y(angle).transform(&z);
        assert!(is_within_tolerance(1.0, result.x(), f64::EPSILON));

        // rotate_x moves the North pole to 90°E
        let result = RotationMatrix::rotate_x(angle).transform(&z);
        assert!(is_within_tolerance(1.0, result.y(), f64::EPSILON));

        // x is on the axis of rotate_x
        let result = RotationMatrix::rotate_x(angle).transform(&x);
        assert_eq!(x, result);

        for degrees in [-135.0, -30.0, 0.0, 10.0, 45.0, 90.0, 170.0] {
            let angle = Angle::from(Degrees(degrees));
            assert_is_rotation(&RotationMatrix::rotate_x(angle));
            assert_is_rotation(&RotationMatrix::rotate_y(angle));
            assert_is_rotation(&RotationMatrix::rotate_z(angle));
        }
    }

    #[test]
    fn test_orientation() {
        let angle = Angle::from(Degrees(30.0));
        let orientation = RotationMatrix::orientation(angle);
        assert_eq!(RotationMatrix::rotate_x(angle).transpose(), orientation);

        // the inverse of the orientation rotation
        let result = orientation * RotationMatrix::rotate_x(angle);
        assert_is_rotation(&result);
        for i in 0..3 {
            assert!(is_within_tolerance(
                1.0,
                result.matrix()[(i, i)],
                f64::EPSILON
            ));
        }

        // an orientation of 90° moves North to West
        let north = NVector::from_degrees(Degrees(0.0), Degrees(1.0));
        let result = RotationMatrix::orientation(Angle::from(Degrees(90.0))).transform(&north);
        assert!(is_within_tolerance(-1.0, result.longitude().0, 1e-12));
        assert!(is_within_tolerance(0.0, result.latitude().0, 1e-12));
    }

    #[test]
    fn test_compose() {
        let rotation = RotationMatrix::compose(Degrees(0.0), Degrees(0.0), Degrees(0.0));
        assert_eq!(RotationMatrix::identity(), rotation);

        let rotation = RotationMatrix::compose(Degrees(25.0), Degrees(-33.9), Degrees(151.2));
        assert_is_rotation(&rotation);

        let centre = NVector::from_degrees(Degrees(151.2), Degrees(-33.9));
        let result = rotation.transform(&centre);
        assert!(is_within_tolerance(1.0, result.x(), f64::EPSILON));
        assert!(is_within_tolerance(0.0, result.longitude().0, 1e-12));
        assert!(is_within_tolerance(0.0, result.latitude().0, 1e-12));
    }

    #[test]
    fn test_compose_north_up() {
        let rotation = RotationMatrix::compose(Degrees(0.0), Degrees(50.0), Degrees(10.0));

        // North of the centre is up
        let result = rotation.transform(&NVector::from_degrees(Degrees(10.0), Degrees(51.0)));
        assert!(is_within_tolerance(0.0, result.longitude().0, 1e-12));
        assert!(is_within_tolerance(1.0, result.latitude().0, 1e-12));

        // East of the centre is right
        let result = rotation.transform(&NVector::from_degrees(Degrees(11.0), Degrees(50.0)));
        assert!(result.longitude().0 > 0.0);
    }

    #[test]
    fn test_transform_preserves_angles() {
        let rotation = RotationMatrix::compose(Degrees(45.0), Degrees(20.0), Degrees(-60.0));
        let a = NVector::from_degrees(Degrees(-77.0), Degrees(39.0));
        let b = NVector::from_degrees(Degrees(29.0), Degrees(42.0));
        let before = crate::great_circle::angle_between(&a, &b).0;
        let after =
            crate::great_circle::angle_between(&rotation.transform(&a), &rotation.transform(&b)).0;
        assert!(is_within_tolerance(before, after, 1e-14));
    }
}
