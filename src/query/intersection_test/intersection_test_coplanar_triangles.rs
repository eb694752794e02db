//! Coplanar triangle-triangle tests.
//!
//! From "A Fast Triangle-Triangle Intersection Test", Tomas Möller, 1997. Both triangles are
//! projected on the axis-aligned plane maximizing the projected area of the first triangle,
//! then edges are tested pairwise (Franklin Antonio's edge-edge test, Graphics Gems III), and
//! finally each triangle is tested for containment inside of the other one.

use crate::math::{default_epsilon, ComplexField, Real};
use crate::shape::Triangle;
use na::{Point2, Vector2};

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
struct SegmentConnection(u8);

bitflags::bitflags! {
    impl SegmentConnection: u8 {
        /// The first endpoint of the segment is a vertex of the other triangle.
        const FIRST = 1;
        /// The second endpoint of the segment is a vertex of the other triangle.
        const SECOND = 1 << 1;
    }
}

/// Intersection test between two coplanar triangles.
///
/// Triangles sharing a vertex or an edge intersect.
///
/// The two triangles must be coplanar. This is only checked in debug builds.
pub fn intersection_test_coplanar_triangles<N: Real>(
    tri1: &Triangle<N>,
    tri2: &Triangle<N>,
) -> bool {
    debug_assert_coplanar(tri1, tri2);

    let (v, u) = project(tri1, tri2);
    let none = SegmentConnection::empty();

    // Test all edges of the first triangle against the edges of the second one.
    for i in 0..3 {
        if intersection_test_segment_triangle(none, &v[i], &v[(i + 1) % 3], &u) {
            return true;
        }
    }

    // Finally, test if a triangle is totally contained in the other.
    is_point_in_triangle_interior(&v[0], &u) || is_point_in_triangle_interior(&u[0], &v)
}

/// Overlap test between two coplanar triangles.
///
/// Unlike [`intersection_test_coplanar_triangles`], triangles touching only on shared
/// vertices or edges do not overlap: only a common area of non-zero measure counts.
///
/// Two identical non-degenerate triangles share their whole area, so they overlap. Contacts
/// that do not go through shared vertices, e.g., a vertex lying on an edge of the other
/// triangle, or edges partially lying on each other, are reported as overlaps too.
///
/// Vertices are considered shared if their projected coordinates are exactly equal.
/// The two triangles must be coplanar. This is only checked in debug builds.
pub fn overlap_test_coplanar_triangles<N: Real>(tri1: &Triangle<N>, tri2: &Triangle<N>) -> bool {
    debug_assert_coplanar(tri1, tri2);

    let (v, u) = project(tri1, tri2);

    if overlap_test_one_way(&v, &u) {
        return true;
    }

    // The edges were all tested already: only the containment of `u` inside `v` remains.
    let cons: [SegmentConnection; 3] =
        core::array::from_fn(|i| segment_connection(&u[i], &u[(i + 1) % 3], &v));

    (0..3).any(|i| is_vertex_free(&cons, i) && is_point_in_triangle_interior(&u[i], &v))
}

fn overlap_test_one_way<N: Real>(v: &[Point2<N>; 3], u: &[Point2<N>; 3]) -> bool {
    let cons: [SegmentConnection; 3] =
        core::array::from_fn(|i| segment_connection(&v[i], &v[(i + 1) % 3], u));

    if cons.iter().all(|con| con.is_all()) {
        // Every vertex is shared: both triangles are the same.
        return !is_degenerate(v);
    }

    for i in 0..3 {
        if !cons[i].is_all() && intersection_test_segment_triangle(cons[i], &v[i], &v[(i + 1) % 3], u)
        {
            return true;
        }
    }

    (0..3).any(|i| is_vertex_free(&cons, i) && is_point_in_triangle_interior(&v[i], u))
}

/// Is the `i`-th vertex connected to none of the vertices of the other triangle?
///
/// `cons[i]` is the connection of the edge starting at the `i`-th vertex.
fn is_vertex_free(cons: &[SegmentConnection; 3], i: usize) -> bool {
    !cons[i].contains(SegmentConnection::FIRST)
        && !cons[(i + 2) % 3].contains(SegmentConnection::SECOND)
}

/// Projects both triangles on the axis-aligned plane maximizing the area of `tri1`.
fn project<N: Real>(tri1: &Triangle<N>, tri2: &Triangle<N>) -> ([Point2<N>; 3], [Point2<N>; 3]) {
    let n = tri1.scaled_normal().abs();

    let (i0, i1) = if n.x > n.y {
        if n.x > n.z {
            (1, 2)
        } else {
            (0, 1)
        }
    } else if n.z > n.y {
        (0, 1)
    } else {
        (0, 2)
    };

    let proj = |tri: &Triangle<N>| tri.vertices().map(|pt| Point2::new(pt[i0], pt[i1]));
    (proj(tri1), proj(tri2))
}

fn segment_connection<N: Real>(
    s1: &Point2<N>,
    s2: &Point2<N>,
    tri: &[Point2<N>; 3],
) -> SegmentConnection {
    let mut con = SegmentConnection::empty();
    con.set(SegmentConnection::FIRST, tri.contains(s1));
    con.set(SegmentConnection::SECOND, tri.contains(s2));
    con
}

fn intersection_test_segment_triangle<N: Real>(
    con: SegmentConnection,
    s1: &Point2<N>,
    s2: &Point2<N>,
    tri: &[Point2<N>; 3],
) -> bool {
    let a = s2 - s1;
    (0..3).any(|i| intersection_test_edge_edge(con, s1, &a, &tri[i], &tri[(i + 1) % 3]))
}

/// Franklin Antonio's segment-segment intersection test.
///
/// Tests the segment `[v, v + a]` against `[u1, u2]`. The endpoints of the first segment
/// flagged in `con` are excluded from the first segment.
fn intersection_test_edge_edge<N: Real>(
    con: SegmentConnection,
    v: &Point2<N>,
    a: &Vector2<N>,
    u1: &Point2<N>,
    u2: &Point2<N>,
) -> bool {
    let b = u1 - u2;
    let c = v - u1;

    let f = a.y * b.x - a.x * b.y;
    // The intersection is at `v + (d / f) * a`.
    let d = b.y * c.x - b.x * c.y;

    let first = !con.contains(SegmentConnection::FIRST);
    let second = !con.contains(SegmentConnection::SECOND);
    let zero = N::zero();

    let (down, up) = if f > zero {
        (
            if first { d >= zero } else { d > zero },
            if second { d <= f } else { d < f },
        )
    } else if f < zero {
        (
            if second { d >= f } else { d > f },
            if first { d <= zero } else { d < zero },
        )
    } else {
        // Parallel edges.
        return false;
    };

    if up && down {
        let e = a.x * c.y - a.y * c.x;
        if f >= zero {
            e >= zero && e <= f
        } else {
            e >= f && e <= zero
        }
    } else {
        false
    }
}

/// Is `pt` strictly inside of the triangle `tri`?
fn is_point_in_triangle_interior<N: Real>(pt: &Point2<N>, tri: &[Point2<N>; 3]) -> bool {
    let side = |p1: &Point2<N>, p2: &Point2<N>| {
        let a = p2.y - p1.y;
        let b = -(p2.x - p1.x);
        let c = -a * p1.x - b * p1.y;
        a * pt.x + b * pt.y + c
    };

    let d0 = side(&tri[0], &tri[1]);
    let d1 = side(&tri[1], &tri[2]);
    let d2 = side(&tri[2], &tri[0]);

    d0 * d1 > N::zero() && d0 * d2 > N::zero()
}

fn is_degenerate<N: Real>(tri: &[Point2<N>; 3]) -> bool {
    (tri[1] - tri[0]).perp(&(tri[2] - tri[0])) == N::zero()
}

fn debug_assert_coplanar<N: Real>(tri1: &Triangle<N>, tri2: &Triangle<N>) {
    if cfg!(debug_assertions) {
        let n = tri1.scaled_normal();
        let tol = ComplexField::sqrt(default_epsilon::<N>()) * n.norm();

        for pt in tri2.vertices() {
            let dpt = pt - tri1.a;
            debug_assert!(
                ComplexField::abs(n.dot(&dpt)) <= tol * (N::one() + dpt.norm()),
                "The triangles are not coplanar."
            );
        }
    }
}
