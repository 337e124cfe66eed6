use super::ensure_finite;
use crate::data::{Hull, Point};
use crate::{Error, HullScalar};

// https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain

// Properties:
//    No panics.
//    All Ok results are valid, strictly convex hulls.
//    No points are outside the resulting hull.
/// $O(n \log n)$ Convex hull of a set of points.
///
/// Andrew's [monotone chain][wiki] algorithm. Points are sorted by x, then y;
/// the lower chain is built left to right and the upper chain right to left.
/// Vertices are returned counter-clockwise starting from the lexicographically
/// smallest point.
///
/// # Collinear points
/// The chains only keep strict left turns, so a point lying on a hull edge is
/// never a vertex. Collinear input gives the two extreme points. Use
/// [`gift_wrapping::convex_hull`](super::gift_wrapping::convex_hull) for the
/// inclusive convention.
///
/// # Errors
/// Will return an error iff a coordinate is NaN or infinite.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All vertices in the hull are from the input set, each exactly once.
/// * No vertex lies on the segment between its neighbours.
///
/// # Examples
///
/// ```rust
/// # use rhull::algorithms::convex_hull::monotone_chain::convex_hull;
/// # use rhull::data::Point;
/// let empty_set: Vec<Point<f64>> = vec![];
/// assert!(convex_hull(empty_set).unwrap().is_empty());
///
/// let line = [(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)].map(Point::from);
/// assert_eq!(
///   convex_hull(line).unwrap().points(),
///   &[Point::new([0.0, 0.0]), Point::new([2.0, 2.0])]
/// );
/// ```
///
/// [wiki]: https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain
pub fn convex_hull<T, I>(pts: I) -> Result<Hull<T>, Error>
where
  T: HullScalar,
  I: IntoIterator<Item = Point<T>>,
{
  let mut pts: Vec<Point<T>> = pts.into_iter().collect();
  ensure_finite(&pts)?;
  let n = pts.len();

  pts.sort_unstable_by(|a, b| a.lex_cmp(b));
  pts.dedup();
  if pts.len() <= 1 {
    return Ok(Hull::new_unchecked(pts));
  }

  let mut lower: Vec<Point<T>> = Vec::with_capacity(pts.len());
  for pt in pts.iter() {
    push_left_turn(&mut lower, *pt);
  }
  let mut upper: Vec<Point<T>> = Vec::with_capacity(pts.len());
  for pt in pts.iter().rev() {
    push_left_turn(&mut upper, *pt);
  }

  // The last point of each chain is the first point of the other.
  lower.pop();
  upper.pop();
  lower.append(&mut upper);

  tracing::debug!(points = n, vertices = lower.len(), "monotone chain finished");
  Ok(Hull::new_unchecked(lower))
}

// Pop until the chain turns strictly counter-clockwise onto `pt`.
fn push_left_turn<T>(chain: &mut Vec<Point<T>>, pt: Point<T>)
where
  T: HullScalar,
{
  while let [.., a, b] = chain.as_slice() {
    if a.orientation(b, &pt).is_ccw() {
      break;
    }
    chain.pop();
  }
  chain.push(pt);
}
