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

//! The radii module contains the Earth radii used by the library.
//!
//! The polar and equatorial radii are those of the
//! [WGS 84](https://www.icao.int/NACC/Documents/Meetings/2014/ECARAIM/REF08-Doc9674.pdf)
//! ellipsoid and the mean radius is the IUGG mean radius of the Earth.

use crate::Metres;

/// The mean radius of the Earth measured in metres.  
/// It is the radius of the sphere used for great circle distances.
pub const MEAN_RADIUS: Metres = Metres(6_371_008.8);

/// The radius of the Earth at the poles measured in metres.
pub const POLAR_RADIUS: Metres = Metres(6_356_752.3142);

/// The radius of the Earth at the equator measured in metres.
pub const EQUATORIAL_RADIUS: Metres = Metres(6_378_137.0);
