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

/// Quadratic Bézier curve: endpoints `p0` and `p2`, one shaping control
/// point `p1`. Collinear or coincident control points are legal; the curve
/// just degenerates to (part of) a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier<T>
where
    T: Scalar,
{
    pub p0: Point2<T>,
    pub p1: Point2<T>,
    pub p2: Point2<T>,
}

impl<T> QuadraticBezier<T>
where
    T: Scalar,
{
    pub fn new(p0: Point2<T>, p1: Point2<T>, p2: Point2<T>) -> Self {
        Self { p0, p1, p2 }
    }

    /// Evaluates `(1-t)²·p0 + 2(1-t)t·p1 + t²·p2` per axis. At `t = 0` and
    /// `t = 1` the basis weights are exactly 0 and 1, so the endpoints are
    /// reproduced bit for bit.
    pub fn point_at(&self, t: T) -> Point2<T> {
        let u = T::one() - t;
        let w0 = u * u;
        let w1 = T::two() * u * t;
        let w2 = t * t;
        Point2::new(
            w0 * self.p0.x + w1 * self.p1.x + w2 * self.p2.x,
            w0 * self.p0.y + w1 * self.p1.y + w2 * self.p2.y,
        )
    }
}
