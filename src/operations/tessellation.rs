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

use crate::error::{GeometryError, Result};
use crate::geometry::{Point2, QuadraticBezier};
use crate::numeric::Scalar;

/// Samples `curve` at `t = i/segments` for `i = 0..=segments`, yielding
/// `segments + 1` points. The first point equals `p0` and the last equals
/// `p2` exactly; `i/segments` is exactly `1` when `i == segments`, and the
/// basis reproduces endpoints bit for bit there.
pub fn tessellate<T>(curve: &QuadraticBezier<T>, segments: usize) -> Result<Vec<Point2<T>>>
where
    T: Scalar,
{
    if segments < 1 {
        return Err(GeometryError::InvalidArgument(
            "tessellate requires at least 1 segment",
        ));
    }

    let denom = T::from_index(segments);
    let mut polyline = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        polyline.push(curve.point_at(T::from_index(i) / denom));
    }
    Ok(polyline)
}
