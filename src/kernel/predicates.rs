// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use crate::geometry::Point2;
use crate::numeric::Scalar;

/// Returns:
/// - >0 if counter-clockwise
/// - <0 if clockwise
/// - =0 if collinear
pub fn orient2d<T>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> T
where
    T: Scalar,
{
    (*b - *a).cross(&(*c - *a))
}

/// Closed (inclusive) point-in-triangle test. The three signed areas
/// (p,a,b), (p,b,c), (p,c,a) agree in sign for an interior point; a point is
/// outside only when strictly positive and strictly negative areas mix, so
/// boundary points count as contained.
pub fn point_in_or_on_triangle<T>(p: &Point2<T>, a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> bool
where
    T: Scalar,
{
    let d0 = orient2d(p, a, b);
    let d1 = orient2d(p, b, c);
    let d2 = orient2d(p, c, a);

    let any_neg = d0 < T::zero() || d1 < T::zero() || d2 < T::zero();
    let any_pos = d0 > T::zero() || d1 > T::zero() || d2 > T::zero();

    !(any_neg && any_pos)
}

/// Shoelace sum over the implicitly closed boundary. Positive for
/// counter-clockwise winding, negative for clockwise.
pub fn signed_area<T>(polygon: &[Point2<T>]) -> T
where
    T: Scalar,
{
    let mut twice = T::zero();
    for (i, p) in polygon.iter().enumerate() {
        let q = &polygon[(i + 1) % polygon.len()];
        twice = twice + (p.x * q.y - q.x * p.y);
    }
    twice / T::two()
}
