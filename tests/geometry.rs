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

use flatshade::geometry::{Point2, QuadraticBezier, Vector2};

#[test]
fn test_distance() {
    let p1 = Point2::new(0.0, 0.0);
    let p2 = Point2::from((3.0, 4.0));
    assert_eq!(p1.distance_to(&p2), 5.0);
}

#[test]
fn test_vector_cross() {
    let v1 = Vector2::new(1.0, 0.0);
    let v2 = Vector2::new(0.0, 1.0);
    assert_eq!(v1.cross(&v2), 1.0);
    assert_eq!(v2.cross(&v1), -1.0);
}

#[test]
fn test_vector_dot() {
    let v1 = Vector2::new(1.0, 2.0);
    let v2 = Vector2::new(3.0, 4.0);
    assert_eq!(v1.dot(&v2), 11.0);
}

#[test]
fn test_point_difference_is_vector() {
    let v = Point2::new(5.0, 7.0) - Point2::new(2.0, 3.0);
    assert_eq!(v, Vector2::new(3.0, 4.0));
    assert_eq!(v.norm(), 5.0);
}

#[test]
fn test_bezier_endpoints_exact() {
    let curve = QuadraticBezier::new(
        Point2::new(0.1, 0.2),
        Point2::new(-3.7, 9.1),
        Point2::new(2.7, -1.3),
    );
    assert_eq!(curve.point_at(0.0), curve.p0);
    assert_eq!(curve.point_at(1.0), curve.p2);
}

#[test]
fn test_bezier_midpoint() {
    let curve = QuadraticBezier::new(
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 1.0),
        Point2::new(2.0, 0.0),
    );
    assert_eq!(curve.point_at(0.5), Point2::new(1.0, 0.5));
}

#[test]
fn test_bezier_degenerate_control_points() {
    // all three control points coincide; every sample is that point
    let p = Point2::new(1.5, -2.5);
    let curve = QuadraticBezier::new(p, p, p);
    assert_eq!(curve.point_at(0.25), p);
    assert_eq!(curve.point_at(0.75), p);
}
