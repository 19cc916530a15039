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

//! The earth module contains the radii of the Earth and a function to
//! calculate the Earth's radius at a given latitude.
//!
//! Great circle calculations use a sphere of `MEAN_RADIUS`. The only
//! allowance for the flattening of the Earth is the `geocentric_radius`,
//! which is used to convert distances in metres into angular distances at
//! a given latitude.

#![allow(clippy::suboptimal_flops)]

pub mod radii;

pub use radii::{EQUATORIAL_RADIUS, MEAN_RADIUS, POLAR_RADIUS};

use crate::{Angle, Degrees, Metres};

/// Calculate the radius of the Earth at a latitude.
///
/// The radius of an ellipsoid with equatorial radius `a` and polar radius `b`
/// at latitude `φ` is:
///
/// `R² = ((a² cos φ)² + (b² sin φ)²) / ((a cos φ)² + (b sin φ)²)`
///
/// It is evaluated as a multiple of `a` where `|sin φ| <= |cos φ|` and as a
/// multiple of `b` elsewhere, so that it returns `EQUATORIAL_RADIUS` at 0°
/// and `POLAR_RADIUS` at ±90° exactly.
/// * `lat` - the latitude.
///
/// # Examples
/// ```
/// use nvector_map::Degrees;
/// use nvector_map::earth::{geocentric_radius, EQUATORIAL_RADIUS, POLAR_RADIUS};
///
/// assert_eq!(EQUATORIAL_RADIUS, geocentric_radius(Degrees(0.0)));
/// assert_eq!(POLAR_RADIUS, geocentric_radius(Degrees(90.0)));
/// assert_eq!(POLAR_RADIUS, geocentric_radius(Degrees(-90.0)));
/// ```
#[must_use]
pub fn geocentric_radius(lat: Degrees) -> Metres {
    let lat = Angle::from(lat);
    let sin_lat = lat.sin().0;
    let cos_lat = lat.cos().0;

    if libm::fabs(sin_lat) <= libm::fabs(cos_lat) {
        let k = POLAR_RADIUS.0 / EQUATORIAL_RADIUS.0;
        Metres(EQUATORIAL_RADIUS.0 * radius_ratio(cos_lat, sin_lat, k))
    } else {
        let k = EQUATORIAL_RADIUS.0 / POLAR_RADIUS.0;
        Metres(POLAR_RADIUS.0 * radius_ratio(sin_lat, cos_lat, k))
    }
}

/// The ratio of the radius to the major term's radius.
/// * `major` - the sine or cosine with the larger magnitude.
/// * `minor` - the other one.
/// * `k` - the ratio of the minor term's radius to the major term's radius.
fn radius_ratio(major: f64, minor: f64, k: f64) -> f64 {
    let scaled = k * minor;
    let double_scaled = k * scaled;
    let sq_major = major * major;
    let numerator = sq_major + double_scaled * double_scaled;
    let denominator = sq_major + scaled * scaled;
    libm::sqrt(numerator / denominator)
}
