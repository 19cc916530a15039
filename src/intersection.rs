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

//! The `intersection` module contains functions for calculating the
//! intersection of great circle paths using n-vectors.
//!
//! Two distinct great circles always intersect at a pair of antipodal
//! points: the cross products of their poles. This module selects the
//! intersection point closest to the centroid of the paths' end points and
//! then tests whether that point lies on both great circle arcs.
//!
//! The selection is a heuristic: where the centroid is (nearly)
//! equidistant from both intersection points, e.g. for paths that run
//! side by side, no intersection is returned.

use crate::great_circle::{great_circle_normal, midpoint, surface_distance};
use crate::{normalise, Metres, NVector, Result};

/// The maximum absolute value of the dot product of the centroid and the
/// intersection point for which the intersection is ambiguous.
pub const AMBIGUITY_THRESHOLD: f64 = 1.0e-12;

/// The tolerance for a point to be on a great circle arc: the maximum
/// difference between the arc length and the sum of the distances from the
/// point to the ends of the arc.
pub const SEGMENT_TOLERANCE: Metres = Metres(0.3);

/// Calculate the intersection point of the great circles through a pair of
/// paths.
/// * `path1_start`, `path1_end` - the start and end of the first path.
/// * `path2_start`, `path2_end` - the start and end of the second path.
///
/// returns the intersection point nearest to the centroid of the four
/// positions, or `None` if the paths are on the same great circle or the
/// centroid is equidistant from both intersection points.
///
/// # Examples
/// ```
/// use nvector_map::{Degrees, NVector};
/// use nvector_map::intersection::calculate_intersection_point;
///
/// // parallel paths
/// let a = NVector::from_degrees(Degrees(-40.0), Degrees(50.0));
/// let b = NVector::from_degrees(Degrees(-20.0), Degrees(50.0));
/// let c = NVector::from_degrees(Degrees(-40.0), Degrees(60.0));
/// let d = NVector::from_degrees(Degrees(-20.0), Degrees(60.0));
/// assert!(calculate_intersection_point(&a, &b, &c, &d).unwrap().is_none());
/// ```
///
/// # Errors
///
/// `Error::DegenerateVector` if either path's start and end are identical
/// or antipodal.
pub fn calculate_intersection_point(
    path1_start: &NVector,
    path1_end: &NVector,
    path2_start: &NVector,
    path2_end: &NVector,
) -> Result<Option<NVector>> {
    let pole1 = great_circle_normal(path1_start, path1_end)?;
    let pole2 = great_circle_normal(path2_start, path2_end)?;

    let cross = pole1.as_vector().cross(pole2.as_vector());
    let Ok(intersection) = NVector::from_vector(&cross) else {
        log::debug!("calculate_intersection_point: paths are on the same great circle");
        return Ok(None);
    };

    let sum = path1_start.as_vector()
        + path2_start.as_vector()
        + path1_end.as_vector()
        + path2_end.as_vector();
    let Ok(centroid) = normalise(&sum) else {
        log::debug!("calculate_intersection_point: paths have no centroid");
        return Ok(None);
    };

    let dp = centroid.dot(intersection.as_vector());
    if libm::fabs(dp) <= AMBIGUITY_THRESHOLD {
        log::debug!("calculate_intersection_point: ambiguous intersection, dot product: {dp}");
        Ok(None)
    } else if dp > 0.0 {
        Ok(Some(intersection))
    } else {
        Ok(Some(intersection.antipode()))
    }
}

/// Determine whether a point is on a great circle arc.
///
/// The point is on the arc if the distances from the ends of the arc to
/// the point sum to the arc length, within `SEGMENT_TOLERANCE`.
/// * `start`, `end` - the ends of the arc.
/// * `point` - the point.
#[must_use]
pub fn is_on_arc(start: &NVector, end: &NVector, point: &NVector) -> bool {
    let delta = surface_distance(start, end).0
        - surface_distance(start, point).0
        - surface_distance(end, point).0;
    libm::fabs(delta) <= SEGMENT_TOLERANCE.0
}

/// Determine whether a pair of great circle arcs intersect.
/// * `path1_start`, `path1_end` - the start and end of the first path.
/// * `path2_start`, `path2_end` - the start and end of the second path.
///
/// returns whether the intersection point of the paths' great circles lies
/// on both arcs, and the distance from the midpoint of the second path to
/// the intersection point. The distance is zero when there is no
/// intersection point.
///
/// # Examples
/// ```
/// use nvector_map::{Degrees, NVector};
/// use nvector_map::intersection::segments_intersect;
///
/// let a = NVector::from_degrees(Degrees(0.0), Degrees(-10.0));
/// let b = NVector::from_degrees(Degrees(0.0), Degrees(10.0));
/// let c = NVector::from_degrees(Degrees(-10.0), Degrees(1.0));
/// let d = NVector::from_degrees(Degrees(10.0), Degrees(1.0));
/// let (intersect, distance) = segments_intersect(&a, &b, &c, &d).unwrap();
/// assert!(intersect);
/// assert!(distance.0 < 1e-6);
/// ```
///
/// # Errors
///
/// `Error::DegenerateVector` if either path's start and end are identical
/// or antipodal.
pub fn segments_intersect(
    path1_start: &NVector,
    path1_end: &NVector,
    path2_start: &NVector,
    path2_end: &NVector,
) -> Result<(bool, Metres)> {
    let Some(intersection) =
        calculate_intersection_point(path1_start, path1_end, path2_start, path2_end)?
    else {
        return Ok((false, Metres(0.0)));
    };

    let centre = midpoint(path2_start, path2_end)?;
    let centre_distance = surface_distance(&centre, &intersection);

    let intersect = is_on_arc(path1_start, path1_end, &intersection)
        && is_on_arc(path2_start, path2_end, &intersection);
    Ok((intersect, centre_distance))
}
