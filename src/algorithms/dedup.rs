use std::collections::HashSet;

use crate::data::Point;
use crate::HullScalar;

/// $O(n)$ Remove duplicate points, keeping the first occurrence of each.
///
/// Equality is exact coordinate equality, so `0.0` and `-0.0` are the same
/// coordinate but two points a rounding error apart are not.
///
/// ```rust
/// # use rhull::algorithms::dedup;
/// # use rhull::data::Point;
/// let pts = vec![
///   Point::new([1.0, 0.0]),
///   Point::new([0.0, 0.0]),
///   Point::new([1.0, 0.0]),
/// ];
/// assert_eq!(
///   dedup(pts),
///   vec![Point::new([1.0, 0.0]), Point::new([0.0, 0.0])]
/// );
/// ```
pub fn dedup<T>(mut pts: Vec<Point<T>>) -> Vec<Point<T>>
where
  T: HullScalar,
{
  let mut seen = HashSet::with_capacity(pts.len());
  pts.retain(|pt| seen.insert(pt.lex_key()));
  pts
}
