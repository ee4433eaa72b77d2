//! Circular-arc discretization for bend segments.

use bendline_math::{rotate_about_axis, Point3, Vec3};

/// Sample a circular arc into `n` points.
///
/// The arc is centered at `center`, starts at `center + start_offset`,
/// lies in the plane perpendicular to `axis`, and spans `total_angle`
/// radians (signed, the sign picks the winding around `axis`).
///
/// Returns exactly `n` points: the partial rotations of `start_offset`
/// by `total_angle * j/n` for `j = 1..=n`. The arc's start point is
/// deliberately excluded — in a centerline run it is already the last
/// polyline entry when the bend begins. The final sample lands exactly
/// on the full rotation (`j/n == 1`), so the arc end is reproducible by
/// a single rotation of `start_offset` by `total_angle`.
pub fn sample_arc(
    center: Point3,
    start_offset: Vec3,
    axis: Vec3,
    total_angle: f64,
    n: u32,
) -> Vec<Point3> {
    let n = n.max(1);
    (1..=n)
        .map(|j| {
            let theta = total_angle * (f64::from(j) / f64::from(n));
            center + rotate_about_axis(start_offset, axis, theta)
        })
        .collect()
}
