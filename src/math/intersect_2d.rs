use crate::geometry::Segment;

use super::predicates::{lies_on, on_same_side};

/// Returns `true` if the closed segments `s1` and `s2` share at least one point.
///
/// Cases are decided in order:
/// 1. a shared endpoint;
/// 2. a degenerate segment, tested as a point against the other one;
/// 3. collinear segments, which overlap iff an endpoint of one lies on the other;
/// 4. the general case: neither segment has both endpoints strictly on one
///    side of the other's supporting line.
///
/// The relation is symmetric.
#[must_use]
pub fn intersect(s1: Segment, s2: Segment) -> bool {
    if s1.has_endpoint(s2.a) || s1.has_endpoint(s2.b) {
        tracing::trace!(?s1, ?s2, "shared endpoint");
        return true;
    }
    if s1.is_degenerate() {
        tracing::trace!(?s1, ?s2, "first segment is a point");
        return lies_on(s2, s1.a);
    }
    if s2.is_degenerate() {
        tracing::trace!(?s1, ?s2, "second segment is a point");
        return lies_on(s1, s2.a);
    }

    let (l1, l2) = (s1.line(), s2.line());
    if l1 == l2 {
        tracing::trace!(?s1, ?s2, "collinear");
        return lies_on(s1, s2.a) || lies_on(s1, s2.b) || lies_on(s2, s1.a) || lies_on(s2, s1.b);
    }

    // Strict side test: touching with one endpoint on the other line counts as crossing.
    let crossing = !on_same_side(l1, s2.a, s2.b) && !on_same_side(l2, s1.a, s1.b);
    tracing::trace!(?s1, ?s2, crossing, "general position");
    crossing
}
