use crate::bounding_volume::OrientedBox;
use crate::math::{ComplexField, Real, DIM};
use crate::query::sat::SatProjection;
use core::ops::ControlFlow;

/// The number of candidate separating axes between two oriented boxes.
#[cfg(feature = "dim3")]
pub const SAT_AXES_COUNT: usize = 15;
/// The number of candidate separating axes between two oriented boxes.
#[cfg(feature = "dim2")]
pub const SAT_AXES_COUNT: usize = 4;

/// Projects two oriented boxes on each of their candidate separating axes.
///
/// The axes are visited in this order:
/// 1. the axes of `obb1`,
/// 2. the axes of `obb2`,
/// 3. (3D only) the cross products `obb1.axis(i) × obb2.axis(k)`, for `i` then `k` in `0..3`.
///
/// `visit` is called once per axis, with the projections of `obb1` (`radius1`) and `obb2`
/// (`radius2`). The traversal stops as soon as `visit` returns [`ControlFlow::Break`].
///
/// Cross products of parallel axes are null: their projections are all zero and they are
/// still visited.
pub fn oriented_box_oriented_box_visit_axes<N: Real, B>(
    obb1: &OrientedBox<N>,
    obb2: &OrientedBox<N>,
    mut visit: impl FnMut(SatProjection<N>) -> ControlFlow<B>,
) -> ControlFlow<B> {
    let e1 = &obb1.half_extents;
    let e2 = &obb2.half_extents;

    // Translation, in the frame of the first box.
    let tra = obb1.basis.to_local(&(obb2.center - obb1.center));

    // Basis of the second box, in the frame of the first box.
    let mut rot = [[N::zero(); DIM]; DIM];
    let mut abs_rot = [[N::zero(); DIM]; DIM];
    for i in 0..DIM {
        for k in 0..DIM {
            rot[i][k] = obb1.basis[i].dot(&obb2.basis[k]);
            abs_rot[i][k] = ComplexField::abs(rot[i][k]);
        }
    }

    // Axes of the first box.
    for i in 0..DIM {
        let radius2 = (0..DIM).fold(N::zero(), |acc, k| acc + e2[k] * abs_rot[i][k]);
        visit(SatProjection::new(ComplexField::abs(tra[i]), e1[i], radius2))?;
    }

    // Axes of the second box.
    for k in 0..DIM {
        let radius1 = (0..DIM).fold(N::zero(), |acc, i| acc + e1[i] * abs_rot[i][k]);
        let distance = (0..DIM).fold(N::zero(), |acc, i| acc + tra[i] * rot[i][k]);
        visit(SatProjection::new(ComplexField::abs(distance), radius1, e2[k]))?;
    }

    // Cross products of the edge directions.
    #[cfg(feature = "dim3")]
    for i in 0..3 {
        let (i1, i2) = ((i + 1) % 3, (i + 2) % 3);

        for k in 0..3 {
            let (k1, k2) = ((k + 1) % 3, (k + 2) % 3);

            let radius1 = e1[i1] * abs_rot[i2][k] + e1[i2] * abs_rot[i1][k];
            let radius2 = e2[k1] * abs_rot[i][k2] + e2[k2] * abs_rot[i][k1];
            let distance = tra[i2] * rot[i1][k] - tra[i1] * rot[i2][k];
            visit(SatProjection::new(ComplexField::abs(distance), radius1, radius2))?;
        }
    }

    ControlFlow::Continue(())
}
