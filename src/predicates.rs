//! Numeric kernel shared by the hull builders.
//!
//! Every decision made here (which side of a line, which of two directions
//! turns further) goes through [`Orientation`], the exact sign of [`cross`].
//! Rounded arithmetic is only used where a magnitude is needed.
use crate::data::{Point, Vector};
use crate::{HullScalar, Orientation};

/// z-component of `(a - o) x (b - o)`.
///
/// Positive if `o -> a -> b` turns counter-clockwise, negative if it turns
/// clockwise, zero if the points are collinear.
///
/// ```rust
/// # use rhull::data::Point;
/// # use rhull::predicates::cross;
/// let o = Point::new([0.0, 0.0]);
/// assert_eq!(cross(&o, &Point::new([1.0, 0.0]), &Point::new([0.0, 1.0])), 1.0);
/// assert_eq!(cross(&o, &Point::new([0.0, 1.0]), &Point::new([1.0, 0.0])), -1.0);
/// assert_eq!(cross(&o, &Point::new([1.0, 1.0]), &Point::new([2.0, 2.0])), 0.0);
/// ```
pub fn cross<T: HullScalar>(o: &Point<T>, a: &Point<T>, b: &Point<T>) -> T {
  (a - o).cross(&(b - o))
}

/// Unit vectors from `origin` towards each point of `pts`, tagged with the
/// point's index in `pts`.
///
/// Points equal to `origin` have no direction and are skipped. The index of
/// every other point is unaffected by the skip.
pub fn normalize<'a, T: HullScalar>(
  origin: &'a Point<T>,
  pts: &'a [Point<T>],
) -> impl Iterator<Item = (usize, Vector<T, 2>)> + 'a {
  pts
    .iter()
    .enumerate()
    .filter_map(move |(idx, pt)| (pt - origin).normalize().map(|unit| (idx, unit)))
}

/// `pt` lies on the line through `origin` in direction `toward - origin`, or
/// to its left.
///
/// A degenerate line (`origin == toward`) contains every point.
pub fn in_half_plane<T: HullScalar>(origin: &Point<T>, toward: &Point<T>, pt: &Point<T>) -> bool {
  !origin.orientation(toward, pt).is_cw()
}

/// Index of the point in `pts` that is furthest ahead along `direction` as
/// seen from `origin`, i.e. the one with the smallest angle to `direction`.
///
/// Only points accepted by `eligible` and distinct from `origin` take part. A
/// later candidate replaces the running best when it is at least as far
/// ahead, so the last of several points in the same direction wins.
///
/// Candidates must lie on or to the left of the line through `origin` along
/// `direction`. Within that half-plane a smaller angle is a clockwise turn, so
/// candidates are compared with the exact [`Orientation`] of
/// `origin -> best -> candidate` and never with rounded angles.
pub fn extreme_index<T, F>(
  origin: &Point<T>,
  direction: &Vector<T, 2>,
  pts: &[Point<T>],
  mut eligible: F,
) -> Option<usize>
where
  T: HullScalar,
  F: FnMut(&Point<T>) -> bool,
{
  let mut best: Option<(usize, Vector<T, 2>)> = None;
  for (idx, unit) in normalize(origin, pts) {
    if !eligible(&pts[idx]) {
      continue;
    }
    match &best {
      Some((running, running_unit))
        if !at_least_as_far(
          origin,
          direction,
          (&pts[*running], running_unit),
          (&pts[idx], &unit),
        ) => {}
      _ => best = Some((idx, unit)),
    }
  }
  best.map(|(idx, _)| idx)
}

type Candidate<'a, T> = (&'a Point<T>, &'a Vector<T, 2>);

fn at_least_as_far<T: HullScalar>(
  origin: &Point<T>,
  direction: &Vector<T, 2>,
  (best, best_unit): Candidate<'_, T>,
  (pt, unit): Candidate<'_, T>,
) -> bool {
  match origin.orientation(best, pt) {
    Orientation::ClockWise => true,
    Orientation::CounterClockWise => false,
    // Same side of `origin` on a shared line: same direction.
    Orientation::CoLinear if origin.lex_cmp(best) == origin.lex_cmp(pt) => true,
    // Opposite directions; the one ahead has the positive component.
    Orientation::CoLinear => (unit - best_unit).dot(direction) >= T::zero(),
  }
}
