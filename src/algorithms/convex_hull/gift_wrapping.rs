use super::ensure_finite;
use crate::algorithms::dedup;
use crate::data::{Hull, Point, Vector};
use crate::predicates::{extreme_index, in_half_plane};
use crate::{Error, HullScalar};

// https://en.wikipedia.org/wiki/Gift_wrapping_algorithm

// Properties:
//    No panics.
//    All Ok results are valid hulls.
//    No points are outside the resulting hull.
/// Convex hull of a set of points.
///
/// [Gift Wrapping][wiki] algorithm. Starting from the lowest (then rightmost)
/// point, the boundary is walked counter-clockwise by repeatedly picking the
/// point with the smallest turn away from the current edge direction.
///
/// Duplicates are removed first, keeping the first occurrence.
///
/// # Collinear points
/// The walk is inclusive: a point lying on a hull edge is a vertex whenever the
/// walk reaches it before the far end of the edge. When several points are in
/// exactly the same direction, the one scanned last (in input order) wins. A
/// point lying on the edge just walked, behind the current vertex, is never
/// picked, so the walk never doubles back. For collinear input this means:
///
/// ```rust
/// # use rhull::algorithms::convex_hull::gift_wrapping::convex_hull;
/// # use rhull::data::Point;
/// let a = Point::new([0.0, 0.0]);
/// let b = Point::new([1.0, 1.0]);
/// let c = Point::new([2.0, 2.0]);
/// // The far point is scanned last: only the extremes are vertices.
/// assert_eq!(convex_hull(vec![a, b, c]).unwrap().points(), &[a, c]);
/// // The near point is scanned last: it is walked through.
/// assert_eq!(convex_hull(vec![a, c, b]).unwrap().points(), &[a, b, c]);
/// ```
///
/// Use [`monotone_chain::convex_hull`](super::monotone_chain::convex_hull) for
/// a hull without collinear vertices.
///
/// # Errors
/// Will return an error iff a coordinate is NaN or infinite.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All vertices in the hull are from the input set, each exactly once.
/// * The first vertex has the smallest y-coordinate, and the largest
///   x-coordinate among those.
///
/// # Time complexity
/// $O(n h)$ where h is the number of hull vertices.
///
/// # Examples
///
/// ```rust
/// # use rhull::algorithms::convex_hull::gift_wrapping::convex_hull;
/// # use rhull::data::Point;
/// let empty_set: Vec<Point<f64>> = vec![];
/// assert!(convex_hull(empty_set).unwrap().is_empty());
///
/// let dups = vec![Point::new([1.0, 1.0])].repeat(3);
/// assert_eq!(convex_hull(dups).unwrap().points(), &[Point::new([1.0, 1.0])]);
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Gift_wrapping_algorithm
pub fn convex_hull<T>(pts: Vec<Point<T>>) -> Result<Hull<T>, Error>
where
  T: HullScalar,
{
  ensure_finite(&pts)?;
  let n = pts.len();
  let mut pool = dedup(pts);

  let first = match seed_index(&pool) {
    Some(idx) => pool.remove(idx),
    None => return Ok(Hull::new_unchecked(pool)),
  };
  let mut hull: Vec<Point<T>> = vec![first];

  let horizontal = Vector([T::one(), T::zero()]);
  if let Some(idx) = extreme_index(&first, &horizontal, &pool, |_| true) {
    hull.push(pool.remove(idx));
  }

  // Removal keeps the pool in input order so that ties stay deterministic.
  while hull.len() >= 2 && !pool.is_empty() {
    let last = hull[hull.len() - 1];
    let prev = hull[hull.len() - 2];
    // Points right of the chord are inside the part of the hull already walked.
    pool.retain(|pt| in_half_plane(&first, &last, pt));
    let heading = &last - &prev;
    match extreme_index(&last, &heading, &pool, |pt| !walked(&prev, &last, pt)) {
      Some(idx) => hull.push(pool.remove(idx)),
      None => break,
    }
  }

  tracing::debug!(points = n, vertices = hull.len(), "gift wrapping finished");
  Ok(Hull::new_unchecked(hull))
}

// Lowest point, rightmost among the lowest. Single pass.
fn seed_index<T>(pts: &[Point<T>]) -> Option<usize>
where
  T: HullScalar,
{
  let mut seed: Option<usize> = None;
  for (idx, pt) in pts.iter().enumerate() {
    match seed {
      Some(s) if pt.y_coord() > pts[s].y_coord() => {}
      Some(s) if pt.y_coord() == pts[s].y_coord() && pt.x_coord() <= pts[s].x_coord() => {}
      _ => seed = Some(idx),
    }
  }
  seed
}

// `pt` lies on the line through the edge `prev -> last`, on the same side of
// `last` as `prev`.
fn walked<T>(prev: &Point<T>, last: &Point<T>, pt: &Point<T>) -> bool
where
  T: HullScalar,
{
  prev.orientation(last, pt).is_colinear() && last.lex_cmp(pt) == last.lex_cmp(prev)
}
