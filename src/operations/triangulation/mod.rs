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

pub mod ear_clip;

pub use ear_clip::triangulate;

/// Result of triangulating one polygon. Triangles store indices into
/// `points`, which is the input boundary verbatim; coincident vertices
/// therefore stay distinguishable.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangulation<T: Scalar> {
    pub points: Vec<Point2<T>>,
    pub triangles: Vec<[usize; 3]>,
}

impl<T: Scalar> Triangulation<T> {
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Triangles as point triples, in emission order.
    pub fn triangles(&self) -> impl Iterator<Item = [Point2<T>; 3]> + '_ {
        self.triangles
            .iter()
            .map(|&[a, b, c]| [self.points[a], self.points[b], self.points[c]])
    }

    /// Interleaved `x, y` coordinates in triangle-list order, ready for a
    /// vertex buffer upload. Byte width and device formats stay with the
    /// caller.
    pub fn positions(&self) -> Vec<T> {
        let mut flat = Vec::with_capacity(self.triangles.len() * 6);
        for [a, b, c] in self.triangles() {
            for p in [a, b, c] {
                flat.push(p.x);
                flat.push(p.y);
            }
        }
        flat
    }
}
