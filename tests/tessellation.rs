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

use flatshade::geometry::{Point2, QuadraticBezier};
use flatshade::{GeometryError, tessellate};

fn arch() -> QuadraticBezier<f64> {
    QuadraticBezier::new(
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 1.0),
        Point2::new(2.0, 0.0),
    )
}

#[test]
fn test_sample_count() {
    for segments in [1, 2, 7, 200] {
        let polyline = tessellate(&arch(), segments).unwrap();
        assert_eq!(polyline.len(), segments + 1);
    }
}

#[test]
fn test_endpoints_are_exact() {
    let curve = QuadraticBezier::new(
        Point2::new(0.3, -0.7),
        Point2::new(11.0, 13.0),
        Point2::new(-5.9, 2.1),
    );
    for segments in [1, 3, 100] {
        let polyline = tessellate(&curve, segments).unwrap();
        assert_eq!(polyline[0], curve.p0);
        assert_eq!(polyline[segments], curve.p2);
    }
}

#[test]
fn test_two_segment_arch() {
    let polyline = tessellate(&arch(), 2).unwrap();
    assert_eq!(
        polyline,
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.5),
            Point2::new(2.0, 0.0),
        ]
    );
}

#[test]
fn test_zero_segments_rejected() {
    assert!(matches!(
        tessellate(&arch(), 0),
        Err(GeometryError::InvalidArgument(_))
    ));
}

#[test]
fn test_deterministic() {
    let a = tessellate(&arch(), 64).unwrap();
    let b = tessellate(&arch(), 64).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_collinear_control_points() {
    // degenerate curve: a straight segment, sampled without complaint
    let curve: QuadraticBezier<f64> = QuadraticBezier::new(
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 1.0),
        Point2::new(2.0, 2.0),
    );
    let polyline = tessellate(&curve, 4).unwrap();
    assert_eq!(polyline.len(), 5);
    for p in &polyline {
        assert!((p.x - p.y).abs() < 1e-12);
    }
}

#[test]
fn test_f32_samples() {
    let curve = QuadraticBezier::new(
        Point2::new(0.0f32, 0.0),
        Point2::new(1.0, 1.0),
        Point2::new(2.0, 0.0),
    );
    let polyline = tessellate(&curve, 2).unwrap();
    assert_eq!(polyline[1], Point2::new(1.0f32, 0.5));
}
