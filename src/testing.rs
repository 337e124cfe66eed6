// Strategies and shared property checks for the test-suite.
//
// `any_pt` and `any_grid_pt` give small integers stored as floats, where every
// difference, dot and cross product is exact. `any_near_colinear_pt` gives
// points whose rounded products are wrong, so only exact predicates get
// them right.
use crate::data::{Hull, Point, PointLocation};
use crate::HullScalar;

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

/// Integer coordinates in `[-50, 50]`. Duplicates and collinear triples are
/// uncommon.
pub fn any_pt() -> impl Strategy<Value = Point<f64>> {
  (-50i32..=50, -50i32..=50).prop_map(|(x, y)| Point::new([f64::from(x), f64::from(y)]))
}

/// Integer coordinates in `[0, 4]`. Duplicates and collinear runs are the norm.
pub fn any_grid_pt() -> impl Strategy<Value = Point<f64>> {
  (0i32..=4, 0i32..=4).prop_map(|(x, y)| Point::new([f64::from(x), f64::from(y)]))
}

/// x in `[-2, 2]` in steps of `0.1`, y a small multiple of `1e-9`. Nearly
/// every triple is almost collinear.
pub fn any_near_colinear_pt() -> impl Strategy<Value = Point<f64>> {
  (-20i32..=20, -3i32..=3).prop_map(|(x, y)| Point::new([f64::from(x) * 0.1, f64::from(y) * 1e-9]))
}

/// Properties every hull builder guarantees:
///  * the hull is valid,
///  * no input point is outside of it,
///  * every vertex is an input point.
pub fn check_hull<T: HullScalar>(pts: &[Point<T>], hull: &Hull<T>) -> Result<(), TestCaseError> {
  prop_assert_eq!(hull.validate(), Ok(()));
  for pt in pts.iter() {
    prop_assert_ne!(hull.locate(pt), PointLocation::Outside, "{:?} escapes {:?}", pt, hull);
  }
  for pt in hull.iter() {
    prop_assert!(pts.contains(pt));
  }
  Ok(())
}
