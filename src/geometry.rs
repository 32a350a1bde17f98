//! Circular arc math for SVG `A` commands.
//!
//! An arc command only names its endpoints, a radius and two flags. To know
//! which points the rasterizer will actually touch, the endpoint form is
//! converted into center form (center, start angle, signed sweep), following
//! the SVG implementation notes for elliptical arcs with `rx == ry` and no
//! axis rotation.

use std::f64::consts::PI;

const LENGTH_EPSILON: f64 = 1e-9;

pub type Point = (f64, f64);

/// Point on a circle of `radius` around `center`, at `angle` radians.
///
/// Angles grow clockwise on screen because the y axis points down.
pub fn polar_point(center: Point, radius: f64, angle: f64) -> Point {
    (
        center.0 + angle.cos() * radius,
        center.1 + angle.sin() * radius,
    )
}

pub fn distance(a: Point, b: Point) -> f64 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    pub center: Point,
    /// Effective radius. Larger than requested when the endpoints are too far
    /// apart for the requested one.
    pub radius: f64,
    pub start_angle: f64,
    /// Signed angle travelled from the start point; positive is clockwise.
    pub sweep_angle: f64,
}

impl ArcGeometry {
    /// Returns `None` when the command draws nothing: coincident endpoints.
    /// A zero radius also yields `None`; renderers draw a straight line there.
    pub fn from_endpoints(
        start: Point,
        end: Point,
        radius: f64,
        large_arc: bool,
        sweep: bool,
    ) -> Option<Self> {
        let mut radius = radius.abs();
        if radius <= LENGTH_EPSILON {
            return None;
        }

        let dx = (start.0 - end.0) / 2.0;
        let dy = (start.1 - end.1) / 2.0;
        let half_chord_sq = dx * dx + dy * dy;
        if half_chord_sq.sqrt() <= LENGTH_EPSILON * radius.max(1.0) {
            return None;
        }

        let lambda = half_chord_sq / (radius * radius);
        if lambda > 1.0 {
            radius *= lambda.sqrt();
        }

        let radius_sq = radius * radius;
        let coef = ((radius_sq - half_chord_sq) / half_chord_sq).max(0.0).sqrt();
        let coef = if large_arc == sweep { -coef } else { coef };

        let cxp = coef * dy;
        let cyp = -coef * dx;
        let center = (
            cxp + (start.0 + end.0) / 2.0,
            cyp + (start.1 + end.1) / 2.0,
        );

        let v1 = ((dx - cxp) / radius, (dy - cyp) / radius);
        let v2 = ((-dx - cxp) / radius, (-dy - cyp) / radius);
        let start_angle = v1.1.atan2(v1.0);
        let mut sweep_angle = (v1.0 * v2.1 - v1.1 * v2.0).atan2(v1.0 * v2.0 + v1.1 * v2.1);

        if !sweep && sweep_angle > 0.0 {
            sweep_angle -= 2.0 * PI;
        } else if sweep && sweep_angle < 0.0 {
            sweep_angle += 2.0 * PI;
        }

        Some(Self {
            center,
            radius,
            start_angle,
            sweep_angle,
        })
    }

    /// Point at parameter `t` in `[0, 1]` along the arc.
    pub fn point_at(&self, t: f64) -> Point {
        polar_point(
            self.center,
            self.radius,
            self.start_angle + self.sweep_angle * t,
        )
    }

    /// `count` evenly spaced points, both endpoints included.
    pub fn sample(&self, count: usize) -> Vec<Point> {
        match count {
            0 => Vec::new(),
            1 => vec![self.point_at(0.0)],
            _ => {
                let last = (count - 1) as f64;
                (0..count).map(|i| self.point_at(i as f64 / last)).collect()
            }
        }
    }
}
