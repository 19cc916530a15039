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

//! The `map_transform` module contains the `MapTransform` type, which
//! converts positions on the sphere into map positions in metres and
//! canvas positions in pixels.
//!
//! A position is first rotated so that the map centre is at (0°, 0°) with
//! the map's up direction towards the North pole. The rotated longitude and
//! latitude are then scaled linearly into metres:
//!
//! `x = longitude / 360° * circumference`, `y = latitude / 360° * circumference`
//!
//! This is a flat approximation which is only valid near the map centre:
//! the distortion grows with the distance from the centre.

use crate::earth::MEAN_RADIUS;
use crate::{Degrees, LonLat, Metres, NVector, RotationMatrix};
use core::f64::consts::TAU;
use nalgebra::{Matrix2, Vector2};

/// A transform from positions on the sphere to a map in metres and a
/// canvas in pixels.
///
/// The fields are independent: changing the map size does not change the
/// canvas size, so the caller must keep their aspect ratios consistent.
/// Zero map or canvas sizes are not checked and produce non-finite canvas
/// positions.
#[derive(Clone, Debug, PartialEq)]
pub struct MapTransform {
    /// The circumference of the sphere.
    circumference: Metres,
    /// The rotation from the map centre and orientation to (0°, 0°, North up).
    rotation: RotationMatrix,
    /// The position of the map centre from the bottom left of the map.
    origin: (Metres, Metres),
    /// The width and height of the map.
    map_size: (Metres, Metres),
    /// The width and height of the canvas in pixels.
    canvas_size: (f64, f64),
}

impl Default for MapTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl MapTransform {
    /// Construct a `MapTransform` on a sphere of the Earth's `MEAN_RADIUS`,
    /// centred on (0°, 0°) with North up.
    /// The map origin and the map and canvas sizes are all zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            circumference: Metres(TAU * MEAN_RADIUS.0),
            rotation: RotationMatrix::identity(),
            origin: (Metres(0.0), Metres(0.0)),
            map_size: (Metres(0.0), Metres(0.0)),
            canvas_size: (0.0, 0.0),
        }
    }

    /// Set the radius of the sphere.
    /// * `radius` - the radius of the sphere.
    pub const fn set_radius(&mut self, radius: Metres) -> &mut Self {
        self.circumference = Metres(TAU * radius.0);
        self
    }

    /// Set the radius of the sphere to the Earth's `MEAN_RADIUS`.
    pub const fn set_earth_radius(&mut self) -> &mut Self {
        self.set_radius(MEAN_RADIUS)
    }

    /// Set the map centre and orientation.
    ///
    /// The rotation is rebuilt from the arguments, for a map centred on
    /// (lon, lat) with true North up use `set_rotation(Degrees(0.0), lat, lon)`.
    /// * `orientation` - the bearing of the map's up direction.
    /// * `lat` - the latitude of the map centre.
    /// * `lon` - the longitude of the map centre.
    pub fn set_rotation(&mut self, orientation: Degrees, lat: Degrees, lon: Degrees) -> &mut Self {
        log::trace!(
            "set_rotation: orientation: {} lat: {} lon: {}",
            orientation.0,
            lat.0,
            lon.0
        );
        self.rotation = RotationMatrix::compose(orientation, lat, lon);
        self
    }

    /// Set the position of the map centre relative to the bottom left of
    /// the map.
    /// * `x`, `y` - the position of the map centre.
    pub const fn set_map_origin(&mut self, x: Metres, y: Metres) -> &mut Self {
        self.origin = (x, y);
        self
    }

    /// Set the size of the map.
    /// * `width`, `height` - the size of the map.
    pub const fn set_map_size(&mut self, width: Metres, height: Metres) -> &mut Self {
        self.map_size = (width, height);
        self
    }

    /// Set the size of the canvas.
    /// * `width`, `height` - the size of the canvas in pixels.
    pub const fn set_canvas_size(&mut self, width: f64, height: f64) -> &mut Self {
        self.canvas_size = (width, height);
        self
    }

    /// Accessor for the circumference of the sphere.
    #[must_use]
    pub const fn circumference(&self) -> Metres {
        self.circumference
    }

    /// Accessor for the rotation.
    #[must_use]
    pub const fn rotation(&self) -> &RotationMatrix {
        &self.rotation
    }

    /// Accessor for the map origin.
    #[must_use]
    pub const fn map_origin(&self) -> (Metres, Metres) {
        self.origin
    }

    /// Accessor for the map size.
    #[must_use]
    pub const fn map_size(&self) -> (Metres, Metres) {
        self.map_size
    }

    /// Accessor for the canvas size.
    #[must_use]
    pub const fn canvas_size(&self) -> (f64, f64) {
        self.canvas_size
    }

    /// Calculate the map position of a point relative to the map centre.
    /// * `point` - the position.
    ///
    /// returns the x (right) and y (up) distances from the map centre.
    ///
    /// # Examples
    /// ```
    /// use nvector_map::{Degrees, MapTransform, NVector};
    ///
    /// let mut transform = MapTransform::new();
    /// transform.set_rotation(Degrees(0.0), Degrees(51.5), Degrees(-3.0));
    ///
    /// let (x, y) = transform.map_position(&NVector::from_degrees(Degrees(-3.0), Degrees(51.5)));
    /// assert!(x.0.abs() < 1e-6);
    /// assert!(y.0.abs() < 1e-6);
    /// ```
    #[must_use]
    pub fn map_position(&self, point: &NVector) -> (Metres, Metres) {
        let rotated = self.rotation.transform(point);
        let metres_per_degree = self.circumference.0 / 360.0;
        (
            Metres(rotated.longitude().0 * metres_per_degree),
            Metres(rotated.latitude().0 * metres_per_degree),
        )
    }

    /// Calculate the map position of a longitude and latitude relative to
    /// the map centre.
    /// * `lon` - the longitude.
    /// * `lat` - the latitude.
    #[must_use]
    pub fn map_position_degrees(&self, lon: Degrees, lat: Degrees) -> (Metres, Metres) {
        self.map_position(&NVector::from_degrees(lon, lat))
    }

    /// Calculate the map position of a `LonLat` relative to the map centre.
    /// * `position` - the position.
    #[must_use]
    pub fn map_position_lon_lat(&self, position: &LonLat) -> (Metres, Metres) {
        self.map_position(&NVector::from(position))
    }

    /// Calculate the canvas position of a map position.
    ///
    /// The map position is rotated through 90° to align the map with the
    /// canvas, offset by the map origin and scaled by the ratios of the
    /// canvas and map sizes. The vertical axis is flipped, since the canvas
    /// origin is at the top left and the map origin is at the bottom left.
    /// * `x`, `y` - the map position relative to the map centre.
    ///
    /// returns the canvas position in pixels from the top left.
    #[must_use]
    pub fn pixel_position(&self, x: Metres, y: Metres) -> (f64, f64) {
        let rotate_90 = Matrix2::new(
            0.0, 1.0, //
            -1.0, 0.0,
        );
        let v = rotate_90 * Vector2::new(x.0, y.0);

        let (canvas_width, canvas_height) = self.canvas_size;
        let scale_x = canvas_width / self.map_size.0 .0;
        let scale_y = canvas_height / self.map_size.1 .0;
        (
            (self.origin.0 .0 + v.x) * scale_x,
            canvas_height - (self.origin.1 .0 + v.y) * scale_y,
        )
    }

    /// Calculate the canvas position of a point.
    /// * `point` - the position.
    ///
    /// returns the canvas position in pixels from the top left.
    #[must_use]
    pub fn pixel_position_of(&self, point: &NVector) -> (f64, f64) {
        let (x, y) = self.map_position(point);
        self.pixel_position(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    const METRES_PER_DEGREE: f64 = 111_195.080_233_532_9;

    #[test]
    fn test_map_transform_traits() {
        let transform = MapTransform::default();
        assert_eq!(MapTransform::new(), transform);
        assert!(is_within_tolerance(
            TAU * MEAN_RADIUS.0,
            transform.circumference().0,
            f64::EPSILON
        ));
        assert_eq!(RotationMatrix::identity(), *transform.rotation());
        assert_eq!((Metres(0.0), Metres(0.0)), transform.map_origin());
        assert_eq!((Metres(0.0), Metres(0.0)), transform.map_size());
        assert_eq!((0.0, 0.0), transform.canvas_size());

        let transform_clone = transform.clone();
        assert!(transform_clone == transform);

        println!("MapTransform: {:?}", transform);
    }

    #[test]
    fn test_setters() {
        let mut transform = MapTransform::new();
        transform
            .set_map_origin(Metres(500.0), Metres(400.0))
            .set_map_size(Metres(1000.0), Metres(800.0))
            .set_canvas_size(200.0, 160.0)
            .set_radius(Metres(1.0));
        assert_eq!((Metres(500.0), Metres(400.0)), transform.map_origin());
        assert_eq!((Metres(1000.0), Metres(800.0)), transform.map_size());
        assert_eq!((200.0, 160.0), transform.canvas_size());
        assert_eq!(Metres(TAU), transform.circumference());

        transform.set_earth_radius();
        let default_circumference = MapTransform::new().circumference();
        assert_eq!(default_circumference, transform.circumference());

        // changing the rotation does not change the sizes
        transform.set_rotation(Degrees(10.0), Degrees(20.0), Degrees(30.0));
        assert_eq!(
            RotationMatrix::compose(Degrees(10.0), Degrees(20.0), Degrees(30.0)),
            *transform.rotation()
        );
        assert_eq!((Metres(1000.0), Metres(800.0)), transform.map_size());
        assert_eq!((200.0, 160.0), transform.canvas_size());
    }

    #[test]
    fn test_map_position_of_centre() {
        let mut transform = MapTransform::new();
        for (lon, lat) in [(0.0, 0.0), (-3.0, 51.5), (151.2, -33.9), (-120.0, 80.0)] {
            transform.set_rotation(Degrees(0.0), Degrees(lat), Degrees(lon));
            let (x, y) = transform.map_position_degrees(Degrees(lon), Degrees(lat));
            assert!(is_within_tolerance(0.0, x.0, 1e-6));
            assert!(is_within_tolerance(0.0, y.0, 1e-6));
        }
    }

    #[test]
    fn test_map_position() {
        let transform = MapTransform::new();
        let (x, y) = transform.map_position_degrees(Degrees(1.0), Degrees(0.0));
        assert!(is_within_tolerance(METRES_PER_DEGREE, x.0, 1e-6));
        assert!(is_within_tolerance(0.0, y.0, 1e-6));

        let position = LonLat::new(Degrees(-2.0), Degrees(-3.0));
        let (x, y) = transform.map_position_lon_lat(&position);
        assert!(is_within_tolerance(-2.0 * METRES_PER_DEGREE, x.0, 1e-6));
        assert!(is_within_tolerance(-3.0 * METRES_PER_DEGREE, y.0, 1e-6));

        // a linear scale of degrees, not a true projection
        let (x, _) = transform.map_position_degrees(Degrees(90.0), Degrees(0.0));
        assert!(is_within_tolerance(90.0 * METRES_PER_DEGREE, x.0, 1e-6));
    }

    #[test]
    fn test_map_position_rotated() {
        let mut transform = MapTransform::new();
        transform.set_rotation(Degrees(0.0), Degrees(50.0), Degrees(10.0));

        // one degree North of the centre
        let (x, y) = transform.map_position_degrees(Degrees(10.0), Degrees(51.0));
        assert!(is_within_tolerance(0.0, x.0, 1e-6));
        assert!(is_within_tolerance(METRES_PER_DEGREE, y.0, 1e-6));

        // oriented 90°: North is to the left
        transform.set_rotation(Degrees(90.0), Degrees(0.0), Degrees(0.0));
        let (x, y) = transform.map_position_degrees(Degrees(0.0), Degrees(1.0));
        assert!(is_within_tolerance(-METRES_PER_DEGREE, x.0, 1e-6));
        assert!(is_within_tolerance(0.0, y.0, 1e-6));
    }

    #[test]
    fn test_map_position_radius() {
        let mut transform = MapTransform::new();
        transform.set_radius(Metres(360.0 / TAU));
        let (x, y) = transform.map_position_degrees(Degrees(12.5), Degrees(-7.25));
        assert!(is_within_tolerance(12.5, x.0, 1e-12));
        assert!(is_within_tolerance(-7.25, y.0, 1e-12));
    }

    fn assert_pixel(expected: (f64, f64), transform: &MapTransform, x: f64, y: f64) {
        let result = transform.pixel_position(Metres(x), Metres(y));
        assert!(is_within_tolerance(expected.0, result.0, 1e-9));
        assert!(is_within_tolerance(expected.1, result.1, 1e-9));
    }

    #[test]
    fn test_pixel_position() {
        let mut transform = MapTransform::new();
        transform
            .set_map_origin(Metres(500.0), Metres(500.0))
            .set_map_size(Metres(1000.0), Metres(1000.0))
            .set_canvas_size(100.0, 100.0);

        assert_pixel((50.0, 50.0), &transform, 0.0, 0.0);

        // the map is rotated through 90° onto the canvas
        assert_pixel((50.0, 60.0), &transform, 100.0, 0.0);
        assert_pixel((60.0, 50.0), &transform, 0.0, 100.0);

        // the canvas origin is at the top left
        assert_pixel((0.0, 0.0), &transform, -500.0, -500.0);
        assert_pixel((100.0, 100.0), &transform, 500.0, 500.0);
    }

    #[test]
    fn test_pixel_position_non_uniform_scale() {
        let mut transform = MapTransform::new();
        transform
            .set_map_origin(Metres(0.0), Metres(0.0))
            .set_map_size(Metres(1000.0), Metres(500.0))
            .set_canvas_size(100.0, 100.0);

        assert_pixel((10.0, 80.0), &transform, -100.0, 100.0);
    }

    #[test]
    fn test_pixel_position_zero_size() {
        let transform = MapTransform::new();
        let (px, py) = transform.pixel_position(Metres(1.0), Metres(1.0));
        assert!(!px.is_finite());
        assert!(!py.is_finite());
    }

    #[test]
    fn test_pixel_position_of() {
        let mut transform = MapTransform::new();
        transform
            .set_rotation(Degrees(0.0), Degrees(51.5), Degrees(-3.0))
            .set_map_origin(Metres(50_000.0), Metres(50_000.0))
            .set_map_size(Metres(100_000.0), Metres(100_000.0))
            .set_canvas_size(1000.0, 1000.0);

        let centre = NVector::from_degrees(Degrees(-3.0), Degrees(51.5));
        let (px, py) = transform.pixel_position_of(&centre);
        assert!(is_within_tolerance(500.0, px, 1e-6));
        assert!(is_within_tolerance(500.0, py, 1e-6));
    }
}
