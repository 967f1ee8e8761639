//! AABB collision test shared by every entity pair.
//!
//! Intervals are closed: two boxes whose edges touch already collide. A ball
//! one row below the top wall therefore registers contact before it could be
//! moved onto (or past) the wall's row.

use crate::entity::{Body, Bounds};

/// Closed-interval overlap of two bounding boxes on both axes.
#[inline]
pub fn overlaps(a: Bounds, b: Bounds) -> bool {
    a.left() <= b.right() && a.right() >= b.left() && a.top() <= b.bottom() && a.bottom() >= b.top()
}

/// Whether two entities collide. Symmetric.
#[inline]
pub fn collides<A, B>(a: &A, b: &B) -> bool
where
    A: Body + ?Sized,
    B: Body + ?Sized,
{
    overlaps(a.bounds(), b.bounds())
}
