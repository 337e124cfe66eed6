use claims::debug_assert_ok;
use std::collections::HashSet;
use std::ops::Index;

use crate::data::{Point, PointLocation};
use crate::{Error, HullScalar, Orientation};

/// Vertices of a convex hull in counter-clockwise order.
///
/// Unlike a polygon, a hull may have fewer than three vertices: the hull of
/// zero or one distinct points is those points, and the hull of collinear
/// points is (at least) the two extremes of their line. Whether vertices lying
/// on a hull edge are kept depends on the builder that produced the hull.
#[derive(Debug, Clone, PartialEq)]
pub struct Hull<T> {
  points: Vec<Point<T>>,
}

impl<T> Hull<T>
where
  T: HullScalar,
{
  /// $O(n)$ Wrap a vertex sequence after checking it with [`Hull::validate`].
  pub fn new(points: Vec<Point<T>>) -> Result<Hull<T>, Error> {
    let hull = Hull { points };
    hull.validate()?;
    Ok(hull)
  }

  /// $O(1)$ Assume that the vertices form a valid hull.
  ///
  /// Validity is only checked in debug builds.
  pub fn new_unchecked(points: Vec<Point<T>>) -> Hull<T> {
    let hull = Hull { points };
    debug_assert_ok!(hull.validate());
    hull
  }

  /// $O(n)$ Check the hull invariants.
  ///
  /// # Errors
  /// * [`Error::NonFiniteCoordinate`] if a vertex is NaN or infinite.
  /// * [`Error::DuplicatePoints`] if a vertex occurs twice.
  /// * [`Error::ConvexViolation`] if three consecutive vertices turn clockwise,
  ///   if a straight turn doubles back, if the boundary winds around more than
  ///   once, or if a collinear hull is not ordered along its line.
  pub fn validate(&self) -> Result<(), Error> {
    if !self.points.iter().all(Point::is_finite) {
      return Err(Error::NonFiniteCoordinate);
    }
    let mut seen = HashSet::with_capacity(self.points.len());
    if !self.points.iter().all(|pt| seen.insert(pt.lex_key())) {
      return Err(Error::DuplicatePoints);
    }
    let n = self.points.len();
    if n < 3 {
      return Ok(());
    }
    if self.is_degenerate() {
      // Out along the line, then straight back along the closing edge.
      let ascending = self.points.windows(2).all(|w| w[0].lex_cmp(&w[1]).is_lt());
      let descending = self.points.windows(2).all(|w| w[0].lex_cmp(&w[1]).is_gt());
      return if ascending || descending {
        Ok(())
      } else {
        Err(Error::ConvexViolation)
      };
    }
    for (a, b, c) in self.triples() {
      match a.orientation(b, c) {
        Orientation::ClockWise => return Err(Error::ConvexViolation),
        Orientation::CoLinear if a.lex_cmp(b) != b.lex_cmp(c) => {
          return Err(Error::ConvexViolation)
        }
        _ => {}
      }
    }
    // Left turns everywhere still admits star shapes that wind more than once.
    let origin = &self.points[0];
    for w in self.points[1..].windows(2) {
      if origin.orientation(&w[0], &w[1]).is_cw() {
        return Err(Error::ConvexViolation);
      }
    }
    Ok(())
  }

  /// Every turn is strictly counter-clockwise, i.e. no vertex lies on the
  /// segment between its neighbours. Trivially true below three vertices.
  pub fn is_strictly_convex(&self) -> bool {
    self.points.len() < 3 || self.triples().all(|(a, b, c)| a.orientation(b, c).is_ccw())
  }

  /// All vertices lie on a single line. Always true below three vertices.
  pub fn is_degenerate(&self) -> bool {
    match self.points.as_slice() {
      [p0, p1, rest @ ..] => rest.iter().all(|pt| p0.orientation(p1, pt).is_colinear()),
      _ => true,
    }
  }

  /// $O(n)$ Locate a point relative to the hull polygon.
  ///
  /// Degenerate hulls have no interior: a point on a one-vertex hull or on the
  /// segment of a collinear hull is [`PointLocation::OnBoundary`].
  pub fn locate(&self, pt: &Point<T>) -> PointLocation {
    match self.points.as_slice() {
      [] => PointLocation::Outside,
      [only] if only == pt => PointLocation::OnBoundary,
      [_] => PointLocation::Outside,
      _ if self.is_degenerate() => self.locate_on_segment(pt),
      _ => {
        let mut on_edge = false;
        for (a, b) in self.edges() {
          match a.orientation(b, pt) {
            Orientation::ClockWise => return PointLocation::Outside,
            Orientation::CoLinear => on_edge = true,
            Orientation::CounterClockWise => {}
          }
        }
        if on_edge {
          PointLocation::OnBoundary
        } else {
          PointLocation::Inside
        }
      }
    }
  }

  fn locate_on_segment(&self, pt: &Point<T>) -> PointLocation {
    let lo = self.points.iter().min_by(|a, b| a.lex_cmp(b));
    let hi = self.points.iter().max_by(|a, b| a.lex_cmp(b));
    match (lo, hi) {
      (Some(lo), Some(hi))
        if lo.orientation(hi, pt).is_colinear()
          && lo.lex_cmp(pt).is_le()
          && pt.lex_cmp(hi).is_le() =>
      {
        PointLocation::OnBoundary
      }
      _ => PointLocation::Outside,
    }
  }
}

impl<T> Hull<T> {
  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point<T>> {
    self.points.iter()
  }

  pub fn points(&self) -> &[Point<T>] {
    &self.points
  }

  pub fn into_points(self) -> Vec<Point<T>> {
    self.points
  }

  /// Closed boundary: `(v0, v1), (v1, v2), ..., (vn, v0)`.
  pub fn edges(&self) -> impl Iterator<Item = (&Point<T>, &Point<T>)> + '_ {
    let n = self.points.len();
    (0..n).map(move |i| (&self.points[i], &self.points[(i + 1) % n]))
  }

  fn triples(&self) -> impl Iterator<Item = (&Point<T>, &Point<T>, &Point<T>)> + '_ {
    let n = self.points.len();
    (0..n).map(move |i| {
      (
        &self.points[i],
        &self.points[(i + 1) % n],
        &self.points[(i + 2) % n],
      )
    })
  }
}

impl<T> Index<usize> for Hull<T> {
  type Output = Point<T>;
  fn index(&self, index: usize) -> &Point<T> {
    self.points.index(index)
  }
}

impl<'a, T> IntoIterator for &'a Hull<T> {
  type Item = &'a Point<T>;
  type IntoIter = std::slice::Iter<'a, Point<T>>;
  fn into_iter(self) -> Self::IntoIter {
    self.points.iter()
  }
}

impl<T> From<Hull<T>> for Vec<Point<T>> {
  fn from(hull: Hull<T>) -> Vec<Point<T>> {
    hull.points
  }
}
