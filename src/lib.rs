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

//! nvector-map
//!
//! A library for performing great circle calculations on a spherical model
//! of the Earth using [n-vectors](https://en.wikipedia.org/wiki/N-vector)
//! and for projecting the results onto a flat, oriented and scaled canvas.
//!
//! ## N-vectors
//!
//! An n-vector is a unit vector normal to the surface of the sphere at a
//! position. Unlike latitude and longitude, n-vectors have no singularities
//! at the poles or discontinuities at the antimeridian, so great circle
//! calculations reduce to simple vector operations:
//!
//! - the angle between two positions is `atan2(|a x b|, a . b)`;
//! - the pole of the great circle through two positions is `a x b`;
//! - the intersection of two great circles is the cross product of their poles.
//!
//! See: [A Non-singular Horizontal Position Representation](https://www.navlab.net/Publications/A_Nonsingular_Horizontal_Position_Representation.pdf).
//!
//! ## Design
//!
//! The `NVector` type represents a position on the sphere. The free
//! functions in the `great_circle` and `intersection` modules calculate
//! distances, destinations and intersections between `NVector`s.
//!
//! The `RotationMatrix` type rotates `NVector`s from (0°, 0°, true north up)
//! to a map centre and orientation, and the `MapTransform` type uses it to
//! convert `NVector`s into map positions in metres and canvas positions in
//! pixels.
//!
//! Positions whose vector would have zero length, e.g. the midpoint of
//! antipodal positions, are reported as `Error::DegenerateVector` rather
//! than propagated as `NaN`s.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Angle`,
//!   `Degrees` and `Radians` and perform trigonometric calculations;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres`;
//! - [nalgebra](https://crates.io/crates/nalgebra) - to perform vector and
//!   matrix calculations.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;

pub mod earth;
pub mod great_circle;
pub mod intersection;
pub mod map_transform;
pub mod rotation;

pub use angle_sc::{Angle, Degrees, Radians};
pub use icao_units::si::Metres;
pub use map_transform::MapTransform;
pub use nalgebra::{Matrix3, Vector3};
pub use rotation::RotationMatrix;

/// The errors that may be returned by the library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A vector to be normalised has zero length, so it has no direction.
    /// E.g. the sum of antipodal positions or the cross product of
    /// identical positions.
    #[error("degenerate vector: cannot normalise a vector of zero length")]
    DegenerateVector,
}

/// Result type for the library.
pub type Result<T> = core::result::Result<T, Error>;

/// Normalise a vector.
/// * `v` - the vector to normalise.
///
/// returns `v` with unit length.
///
/// # Errors
///
/// `Error::DegenerateVector` if `v` has zero length.
pub fn normalise(v: &Vector3<f64>) -> Result<Vector3<f64>> {
    v.try_normalize(0.0).ok_or_else(|| {
        log::debug!("normalise: zero length vector {v:?}");
        Error::DegenerateVector
    })
}

/// A longitude and latitude pair in degrees.
///
/// The values are not range checked: longitude is not wrapped to ±180°
/// and latitude is not clamped to ±90°.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LonLat {
    lon: f64,
    lat: f64,
}

impl LonLat {
    /// Constructor.
    /// * `lon` - the longitude.
    /// * `lat` - the latitude.
    #[must_use]
    pub const fn new(lon: Degrees, lat: Degrees) -> Self {
        Self {
            lon: lon.0,
            lat: lat.0,
        }
    }

    /// The longitude.
    #[must_use]
    pub const fn lon(&self) -> Degrees {
        Degrees(self.lon)
    }

    /// The latitude.
    #[must_use]
    pub const fn lat(&self) -> Degrees {
        Degrees(self.lat)
    }
}

/// A position on the sphere, represented by a unit vector: an n-vector.
///
/// The x axis points at (0°, 0°), the y axis at (90°E, 0°) and the z axis
/// at the North pole.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NVector(Vector3<f64>);

impl NVector {
    /// Construct an `NVector` from a longitude and latitude.
    /// * `lon` - the longitude.
    /// * `lat` - the latitude.
    ///
    /// # Examples
    /// ```
    /// use nvector_map::{Degrees, NVector};
    ///
    /// let north_pole = NVector::from_degrees(Degrees(0.0), Degrees(90.0));
    /// assert_eq!(0.0, north_pole.x());
    /// assert_eq!(0.0, north_pole.y());
    /// assert_eq!(1.0, north_pole.z());
    /// ```
    #[must_use]
    pub fn from_degrees(lon: Degrees, lat: Degrees) -> Self {
        // Angle::from(Degrees) is exact at multiples of 90°
        let lon = Angle::from(lon);
        let lat = Angle::from(lat);
        let cos_lat = lat.cos().0;
        let v = Vector3::new(cos_lat * lon.cos().0, cos_lat * lon.sin().0, lat.sin().0);
        Self(v.normalize())
    }

    /// Construct an `NVector` from a `LonLat`.
    #[must_use]
    pub fn from_lon_lat(position: &LonLat) -> Self {
        Self::from_degrees(position.lon(), position.lat())
    }

    /// Construct an `NVector` by normalising a vector.
    /// * `v` - the vector, it need not be a unit vector.
    ///
    /// # Errors
    ///
    /// `Error::DegenerateVector` if `v` has zero length.
    pub fn from_vector(v: &Vector3<f64>) -> Result<Self> {
        normalise(v).map(Self)
    }

    /// The x component.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    /// The y component.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// The z component.
    #[must_use]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// The underlying unit vector.
    #[must_use]
    pub const fn as_vector(&self) -> &Vector3<f64> {
        &self.0
    }

    /// The latitude of the position: `atan2(z, sqrt(x² + y²))`.
    #[must_use]
    pub fn latitude(&self) -> Degrees {
        let v = &self.0;
        Degrees(libm::atan2(v.z, libm::sqrt(v.x * v.x + v.y * v.y)).to_degrees())
    }

    /// The longitude of the position: `atan2(y, x)`.
    ///
    /// Longitude is undefined at the poles, where the result is whatever `atan2`
    /// gives for the signed zero `x` and `y` components, e.g. 180° for a pole
    /// created with a longitude of 180°.
    #[must_use]
    pub fn longitude(&self) -> Degrees {
        Degrees(libm::atan2(self.0.y, self.0.x).to_degrees())
    }

    /// The longitude and latitude of the position.
    #[must_use]
    pub fn to_degrees(&self) -> (Degrees, Degrees) {
        (self.longitude(), self.latitude())
    }

    /// The position as a `LonLat`.
    #[must_use]
    pub fn to_lon_lat(&self) -> LonLat {
        LonLat::new(self.longitude(), self.latitude())
    }

    /// The antipodal position.
    #[must_use]
    pub fn antipode(&self) -> Self {
        Self(-self.0)
    }

    /// Re-normalise the vector, removing any accumulated rounding error.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self(self.0.normalize())
    }
}

impl From<&LonLat> for NVector {
    fn from(position: &LonLat) -> Self {
        Self::from_lon_lat(position)
    }
}

impl From<NVector> for LonLat {
    fn from(point: NVector) -> Self {
        point.to_lon_lat()
    }
}

impl TryFrom<Vector3<f64>> for NVector {
    type Error = Error;

    fn try_from(v: Vector3<f64>) -> Result<Self> {
        Self::from_vector(&v)
    }
}
