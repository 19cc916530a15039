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

//! The `great_circle` module contains functions for calculating distances,
//! midpoints and destinations of great circle paths between `NVector`s on
//! a sphere of the Earth's `MEAN_RADIUS`.
//!
//! The functions are pure: they take `NVector`s by reference and return new
//! `NVector`s. Where a calculation requires normalising a vector of zero
//! length, e.g. the pole of a great circle between identical or antipodal
//! positions, the function returns `Error::DegenerateVector`.

use crate::earth::{geocentric_radius, MEAN_RADIUS};
use crate::{normalise, Angle, Degrees, LonLat, Metres, NVector, Radians, Result, Vector3};

/// Calculate the great circle angle between two positions.
///
/// Uses `atan2(|a x b|, a . b)`, which is accurate for both small and
/// nearly antipodal angles, unlike `acos(a . b)`.
/// * `a`, `b` - the positions.
///
/// returns the angle in the range `0..=π`.
#[must_use]
pub fn angle_between(a: &NVector, b: &NVector) -> Radians {
    let sin_theta = a.as_vector().cross(b.as_vector()).norm();
    let cos_theta = a.as_vector().dot(b.as_vector());
    Radians(libm::atan2(sin_theta, cos_theta))
}

/// Calculate the great circle distance between two positions on a sphere of
/// the Earth's `MEAN_RADIUS`.
/// * `a`, `b` - the positions.
///
/// # Examples
/// ```
/// use nvector_map::{Degrees, NVector};
/// use nvector_map::great_circle::surface_distance;
/// use angle_sc::is_within_tolerance;
///
/// let a = NVector::from_degrees(Degrees(0.0), Degrees(0.0));
/// let b = NVector::from_degrees(Degrees(1.0), Degrees(0.0));
/// assert!(is_within_tolerance(111_195.080_233_532_9, surface_distance(&a, &b).0, 1e-6));
/// ```
#[must_use]
pub fn surface_distance(a: &NVector, b: &NVector) -> Metres {
    Metres(angle_between(a, b).0 * MEAN_RADIUS.0)
}

/// Calculate the midpoint of the great circle path between two positions.
/// * `a`, `b` - the positions.
///
/// # Errors
///
/// `Error::DegenerateVector` if `a` and `b` are antipodal.
pub fn midpoint(a: &NVector, b: &NVector) -> Result<NVector> {
    NVector::from_vector(&(a.as_vector() + b.as_vector()))
}

/// Calculate the pole of the great circle from `a` to `b`.
///
/// The pole is the normal to the plane of the great circle, it is to the
/// left of the direction of travel from `a` to `b`.
/// * `a`, `b` - the positions.
///
/// # Errors
///
/// `Error::DegenerateVector` if `a` and `b` are identical or antipodal.
pub fn great_circle_normal(a: &NVector, b: &NVector) -> Result<NVector> {
    NVector::from_vector(&a.as_vector().cross(b.as_vector()))
}

/// Calculate the destination `NVector` from a start position, distance and
/// bearing.
///
/// The direction of travel is composed from the local East and North
/// vectors at `start`:
/// - East = Z x start;
/// - North = start x East;
/// - direction = North cos(bearing) + East sin(bearing);
/// - destination = start cos(distance) + direction sin(distance).
/// * `start` - the start position.
/// * `distance` - the great circle distance.
/// * `bearing` - the bearing, clockwise from North.
///
/// # Errors
///
/// `Error::DegenerateVector` if `start` is at a pole, where East is undefined.
pub fn destination_point(start: &NVector, distance: Radians, bearing: Radians) -> Result<NVector> {
    calculate_destination(start, Angle::from(distance), Angle::from(bearing))
}

/// Calculate the destination `NVector` from a start position, distance in
/// `Metres` and bearing in `Degrees`.
///
/// The distance is converted to an angle using the `geocentric_radius` at
/// `lat`.
/// * `start` - the start position.
/// * `distance` - the distance to travel.
/// * `bearing` - the bearing, clockwise from North.
/// * `lat` - the latitude to calculate the Earth's radius at.
///
/// # Errors
///
/// `Error::DegenerateVector` if `start` is at a pole.
pub fn destination_point_metres(
    start: &NVector,
    distance: Metres,
    bearing: Degrees,
    lat: Degrees,
) -> Result<NVector> {
    let distance = Radians(distance.0 / geocentric_radius(lat).0);
    calculate_destination(start, Angle::from(distance), Angle::from(bearing))
}

/// Calculate the destination `LonLat` from a start `LonLat`, distance in
/// `Metres` and bearing in `Degrees`, using the `geocentric_radius` at the
/// start latitude.
/// * `start` - the start position.
/// * `distance` - the distance to travel.
/// * `bearing` - the bearing, clockwise from North.
///
/// # Examples
/// ```
/// use nvector_map::{Degrees, LonLat, Metres};
/// use nvector_map::great_circle::destination_lon_lat;
/// use angle_sc::is_within_tolerance;
///
/// let start = LonLat::new(Degrees(0.0), Degrees(0.0));
/// let result = destination_lon_lat(&start, Metres(1_000_000.0), Degrees(0.0)).unwrap();
/// assert!(is_within_tolerance(0.0, result.lon().0, 1e-12));
/// assert!(is_within_tolerance(8.983_152_841_195_215, result.lat().0, 1e-12));
/// ```
///
/// # Errors
///
/// `Error::DegenerateVector` if `start` is at a pole.
pub fn destination_lon_lat(start: &LonLat, distance: Metres, bearing: Degrees) -> Result<LonLat> {
    let point = destination_point_metres(&NVector::from(start), distance, bearing, start.lat())?;
    Ok(point.to_lon_lat())
}

fn calculate_destination(start: &NVector, distance: Angle, bearing: Angle) -> Result<NVector> {
    let p = start.as_vector();
    let east = normalise(&Vector3::z().cross(p))?;
    let north = normalise(&p.cross(&east))?;

    let direction = north * bearing.cos().0 + east * bearing.sin().0;
    NVector::from_vector(&(p * distance.cos().0 + direction * distance.sin().0))
}
