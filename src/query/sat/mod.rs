//! Application of the Separating Axis Theorem (SAT) to oriented boxes.
//!
//! Two convex shapes do **not** intersect if and only if there exists an axis onto which
//! their projections do not overlap. For two oriented boxes, a finite set of candidate axes
//! is enough:
//!
//! - the face normals of each box (`DIM` each),
//! - in 3D, the cross products of one edge direction of each box (`3 × 3 = 9`).
//!
//! The same candidate axes drive both the boolean intersection tests and the
//! classification tests: [`classify_sat_axis`] turns the projections on one axis into an
//! [`IntersectionType`](crate::query::IntersectionType), merged over all the axes.

pub use self::sat_axis::{classify_sat_axis, SatProjection};
pub use self::sat_oriented_box_oriented_box::{
    oriented_box_oriented_box_visit_axes, SAT_AXES_COUNT,
};

mod sat_axis;
mod sat_oriented_box_oriented_box;
