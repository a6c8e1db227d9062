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
use crate::geometry::Point2;
use crate::kernel::{orient2d, point_in_or_on_triangle};
use crate::numeric::Scalar;
use crate::operations::triangulation::Triangulation;

/// Ear-clipping triangulation of a simple, counter-clockwise polygon.
///
/// The working list holds indices into `polygon`, so the ear vertices are
/// excluded from the containment scan by slot, never by coordinate value.
/// Each pass over the working list clips the first valid ear and restarts
/// from the front; a pass that clips nothing means the input was not a
/// simple CCW polygon and fails instead of re-scanning forever.
pub fn triangulate<T>(polygon: &[Point2<T>]) -> Result<Triangulation<T>>
where
    T: Scalar,
{
    if polygon.len() < 3 {
        return Err(GeometryError::InvalidArgument(
            "triangulate requires at least 3 vertices",
        ));
    }

    let mut remaining: Vec<usize> = (0..polygon.len()).collect();
    let mut triangles = Vec::with_capacity(polygon.len() - 2);

    'clip: while remaining.len() > 3 {
        for i in 0..remaining.len() {
            let prev = remaining[(i + remaining.len() - 1) % remaining.len()];
            let curr = remaining[i];
            let next = remaining[(i + 1) % remaining.len()];

            if is_ear(polygon, &remaining, prev, curr, next) {
                triangles.push([prev, curr, next]);
                remaining.remove(i);
                continue 'clip;
            }
        }

        log::debug!(
            "ear search exhausted with {} of {} vertices left",
            remaining.len(),
            polygon.len()
        );
        return Err(GeometryError::DegeneratePolygon {
            remaining: remaining.len(),
        });
    }

    // Any 3 remaining vertices close the polygon; no ear test needed.
    triangles.push([remaining[0], remaining[1], remaining[2]]);

    Ok(Triangulation {
        points: polygon.to_vec(),
        triangles,
    })
}

fn is_ear<T>(points: &[Point2<T>], remaining: &[usize], prev: usize, curr: usize, next: usize) -> bool
where
    T: Scalar,
{
    let (a, b, c) = (&points[prev], &points[curr], &points[next]);

    // Reflex corner: clipping it would leave the polygon.
    if orient2d(a, b, c) < T::zero() {
        return false;
    }

    remaining
        .iter()
        .filter(|&&other| other != prev && other != curr && other != next)
        .all(|&other| !point_in_or_on_triangle(&points[other], a, b, c))
}
